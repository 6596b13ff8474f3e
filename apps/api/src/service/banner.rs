//! # Banner Service
//!
//! Banner image upload for games.
//!
//! ## Validation Order
//! ```text
//! empty payload? ──► 400 before anything else
//!      │
//!      ▼
//! game exists? ────► 404 before touching the filesystem
//!      │
//!      ▼
//! content type starts with image/? ──► 400
//!      │
//!      ▼
//! extension in .jpg/.jpeg/.png/.gif? ──► 400
//!      │
//!      ▼
//! delete prior banner files ──► write new file ──► persist banner_path
//! ```
//!
//! The delete-then-write sequence is not atomic; a crash mid-write can
//! leave a truncated file. Concurrent uploads for the same game id are
//! last-writer-wins.

use std::sync::Arc;

use tracing::info;

use gamevault_core::validation;
use gamevault_db::Database;
use gamevault_media::{banner_candidates, banner_relative_path, BlobStore};

use crate::error::{AppError, AppResult};

/// Service for banner image uploads.
#[derive(Clone)]
pub struct BannerService {
    db: Database,
    blobs: Arc<dyn BlobStore>,
}

impl BannerService {
    /// Creates a new BannerService.
    pub fn new(db: Database, blobs: Arc<dyn BlobStore>) -> Self {
        BannerService { db, blobs }
    }

    /// Stores a banner image for a game and records its path.
    ///
    /// The destination is deterministic
    /// (`resources/games/<game_id><extension>`); any prior banner for the
    /// game id is removed first so exactly one file per game remains.
    ///
    /// ## Returns
    /// The relative path that was written.
    ///
    /// ## Errors
    /// * `ValidationError` - Empty payload, non-image content type, or
    ///   disallowed extension (nothing is written in these cases)
    /// * `NotFound` - No game with this id
    pub async fn upload(
        &self,
        game_id: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> AppResult<String> {
        validation::validate_payload_non_empty(bytes.len())?;

        let mut game = self
            .db
            .games()
            .get(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("Game", game_id))?;

        validation::validate_image_content_type(content_type)?;
        let extension = validation::validate_banner_extension(filename)?;

        // Clear any prior banner, whatever extension it was uploaded with.
        for candidate in banner_candidates(game_id) {
            if self.blobs.exists(&candidate).await? {
                self.blobs.delete(&candidate).await?;
            }
        }

        let path = banner_relative_path(game_id, &extension);
        self.blobs.write(&path, bytes).await?;

        game.banner_path = Some(path.clone());
        self.db.games().update(&game).await?;

        info!(game_id, path = %path, "Banner uploaded");
        Ok(path)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
