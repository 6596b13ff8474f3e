//! # Banner Path Layout
//!
//! The destination path for a banner is deterministic: one file per game,
//! named by the game id, under the games folder. Uploading a new banner
//! for a game replaces whatever file was there, regardless of extension.

use gamevault_core::ALLOWED_BANNER_EXTENSIONS;

/// Folder for game banner images, relative to the content root.
pub const GAMES_FOLDER: &str = "resources/games";

/// Builds the relative banner path for a game id and a normalized
/// (lowercase, dot-prefixed) extension.
///
/// ## Example
/// ```rust
/// use gamevault_media::banner_relative_path;
///
/// let path = banner_relative_path("abc-123", ".png");
/// assert_eq!(path, "resources/games/abc-123.png");
/// ```
pub fn banner_relative_path(game_id: &str, extension: &str) -> String {
    format!("{GAMES_FOLDER}/{game_id}{extension}")
}

/// All paths a banner for this game id could live at, one per allowed
/// extension. Used to clear prior banners before a new write so only a
/// single file per game id remains.
pub fn banner_candidates(game_id: &str) -> Vec<String> {
    ALLOWED_BANNER_EXTENSIONS
        .iter()
        .map(|extension| banner_relative_path(game_id, extension))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_relative_path() {
        assert_eq!(
            banner_relative_path("550e8400", ".jpg"),
            "resources/games/550e8400.jpg"
        );
    }

    #[test]
    fn test_candidates_cover_all_allowed_extensions() {
        let candidates = banner_candidates("g-1");
        assert_eq!(candidates.len(), 4);
        assert!(candidates.contains(&"resources/games/g-1.jpg".to_string()));
        assert!(candidates.contains(&"resources/games/g-1.jpeg".to_string()));
        assert!(candidates.contains(&"resources/games/g-1.png".to_string()));
        assert!(candidates.contains(&"resources/games/g-1.gif".to_string()));
    }
}
