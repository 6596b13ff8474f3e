//! Shared application state.

use std::sync::Arc;

use gamevault_db::Database;
use gamevault_media::BlobStore;

/// State shared by all request handlers.
///
/// Cloneable: the database handle shares its pool, the blob store is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (games and carts repositories).
    pub db: Database,

    /// Blob store for banner images.
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(db: Database, blobs: Arc<dyn BlobStore>) -> Self {
        AppState { db, blobs }
    }
}
