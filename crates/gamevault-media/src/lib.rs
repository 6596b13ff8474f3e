//! # gamevault-media: Banner File Storage for GameVault
//!
//! The blob/file store collaborator. Banner uploads resolve to a
//! deterministic relative path (`resources/games/<game_id><extension>`)
//! under a configured content root; this crate provides the [`BlobStore`]
//! seam plus the filesystem implementation that the API app plugs in.
//!
//! ## Known Gap
//! Banner writes are delete-then-write, not an atomic rename. A crash
//! mid-write can leave a truncated file. Acceptable for this scope;
//! concurrent uploads for the same game are last-writer-wins.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod path;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{MediaError, MediaResult};
pub use path::{banner_candidates, banner_relative_path, GAMES_FOLDER};
pub use store::{BlobStore, FsBlobStore};
