//! # Blob Store
//!
//! The file-store seam the storefront services program against, plus the
//! filesystem implementation used in production.
//!
//! Paths are always relative to the configured content root; the store
//! rejects any path that would resolve outside of it.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

// =============================================================================
// BlobStore Trait
// =============================================================================

/// Binary blob storage keyed by relative path.
///
/// The three operations the storefront needs from its file-store
/// collaborator. Implementations must treat `path` as relative to their
/// own root.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Checks whether a blob exists at the given relative path.
    async fn exists(&self, path: &str) -> MediaResult<bool>;

    /// Writes a blob at the given relative path, creating parent
    /// directories as needed and truncating any existing file.
    async fn write(&self, path: &str, bytes: &[u8]) -> MediaResult<()>;

    /// Deletes the blob at the given relative path. Deleting a missing
    /// blob is not an error.
    async fn delete(&self, path: &str) -> MediaResult<()>;
}

// =============================================================================
// Filesystem Implementation
// =============================================================================

/// Filesystem-backed blob store rooted under a content directory.
///
/// ## Usage
/// ```rust,ignore
/// let store = FsBlobStore::new("./content").await?;
/// store.write("resources/games/abc.png", &bytes).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Creates a store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> MediaResult<Self> {
        let root = root.into();

        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| MediaError::RootUnavailable {
                root: root.clone(),
                source,
            })?;

        Ok(FsBlobStore { root })
    }

    /// Returns the content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path against the root, rejecting traversal.
    fn resolve(&self, path: &str) -> MediaResult<PathBuf> {
        let relative = Path::new(path);

        let escapes = relative.components().any(|component| {
            matches!(component, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            return Err(MediaError::PathOutsideRoot {
                path: path.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn exists(&self, path: &str) -> MediaResult<bool> {
        let full = self.resolve(path)?;

        match tokio::fs::metadata(&full).await {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(MediaError::io(path, err)),
        }
    }

    async fn write(&self, path: &str, bytes: &[u8]) -> MediaResult<()> {
        let full = self.resolve(path)?;

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| MediaError::io(path, err))?;
        }

        debug!(path, len = bytes.len(), "Writing blob");
        tokio::fs::write(&full, bytes)
            .await
            .map_err(|err| MediaError::io(path, err))
    }

    async fn delete(&self, path: &str) -> MediaResult<()> {
        let full = self.resolve(path)?;

        debug!(path, "Deleting blob");
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(MediaError::io(path, err)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (tempfile::TempDir, FsBlobStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FsBlobStore::new(dir.path()).await.expect("store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_write_exists_delete_round_trip() {
        let (_dir, store) = test_store().await;

        assert!(!store.exists("resources/games/a.png").await.unwrap());

        store
            .write("resources/games/a.png", b"png-bytes")
            .await
            .unwrap();
        assert!(store.exists("resources/games/a.png").await.unwrap());

        store.delete("resources/games/a.png").await.unwrap();
        assert!(!store.exists("resources/games/a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_creates_nested_directories() {
        let (dir, store) = test_store().await;

        store.write("resources/games/deep.gif", b"x").await.unwrap();

        let on_disk = dir.path().join("resources/games/deep.gif");
        assert_eq!(std::fs::read(on_disk).unwrap(), b"x");
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let (_dir, store) = test_store().await;
        store.delete("resources/games/missing.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_overwrites_existing() {
        let (dir, store) = test_store().await;

        store.write("a.png", b"first").await.unwrap();
        store.write("a.png", b"second").await.unwrap();

        assert_eq!(std::fs::read(dir.path().join("a.png")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let (_dir, store) = test_store().await;

        let err = store.write("../outside.png", b"x").await.unwrap_err();
        assert!(matches!(err, MediaError::PathOutsideRoot { .. }));

        let err = store.exists("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, MediaError::PathOutsideRoot { .. }));
    }
}
