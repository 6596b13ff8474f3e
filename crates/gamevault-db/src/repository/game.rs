//! # Game Repository
//!
//! Database operations for the game catalog.
//!
//! ## Versioned Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  update(game)                                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UPDATE games SET ..., version = version + 1                        │
//! │  WHERE id = ? AND version = ?   ← the version read earlier          │
//! │       │                                                             │
//! │       ├── rows_affected = 1 → Ok(updated game)                      │
//! │       │                                                             │
//! │       └── rows_affected = 0 → re-check existence                    │
//! │             ├── row exists   → Conflict (modified concurrently)     │
//! │             └── row missing  → NotFound (deleted concurrently)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use gamevault_core::Game;

const GAME_COLUMNS: &str = "id, title, description, price_cents, original_price_cents, \
     discount_percent, banner_path, created_at, updated_at, version";

/// Repository for game catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = GameRepository::new(pool);
/// let games = repo.list().await?;
/// let game = repo.get("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: SqlitePool,
}

impl GameRepository {
    /// Creates a new GameRepository.
    pub fn new(pool: SqlitePool) -> Self {
        GameRepository { pool }
    }

    /// Lists all games, ordered by title.
    pub async fn list(&self) -> DbResult<Vec<Game>> {
        let games = sqlx::query_as::<_, Game>(&format!(
            "SELECT {GAME_COLUMNS} FROM games ORDER BY title"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(games)
    }

    /// Gets a game by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Game))` - Game found
    /// * `Ok(None)` - Game not found
    pub async fn get(&self, id: &str) -> DbResult<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(game)
    }

    /// Checks whether a game row exists.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new game.
    pub async fn insert(&self, game: &Game) -> DbResult<()> {
        debug!(id = %game.id, title = %game.title, "Inserting game");

        sqlx::query(
            "INSERT INTO games (
                id, title, description, price_cents, original_price_cents,
                discount_percent, banner_path, created_at, updated_at, version
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&game.id)
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.price_cents)
        .bind(game.original_price_cents)
        .bind(game.discount_percent)
        .bind(&game.banner_path)
        .bind(game.created_at)
        .bind(game.updated_at)
        .bind(game.version)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Saves an updated game, enforcing optimistic concurrency.
    ///
    /// `game.version` must be the version that was read; the row's version
    /// is incremented on success.
    ///
    /// ## Returns
    /// * `Ok(Game)` - The game as persisted (bumped version, fresh
    ///   `updated_at`)
    /// * `Err(DbError::Conflict)` - Version mismatch, row still exists
    /// * `Err(DbError::NotFound)` - Row was deleted concurrently
    pub async fn update(&self, game: &Game) -> DbResult<Game> {
        debug!(id = %game.id, version = game.version, "Updating game");

        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE games SET
                title = ?,
                description = ?,
                price_cents = ?,
                original_price_cents = ?,
                discount_percent = ?,
                banner_path = ?,
                updated_at = ?,
                version = version + 1
            WHERE id = ? AND version = ?",
        )
        .bind(&game.title)
        .bind(&game.description)
        .bind(game.price_cents)
        .bind(game.original_price_cents)
        .bind(game.discount_percent)
        .bind(&game.banner_path)
        .bind(now)
        .bind(&game.id)
        .bind(game.version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if self.exists(&game.id).await? {
                return Err(DbError::conflict("Game", &game.id));
            }
            return Err(DbError::not_found("Game", &game.id));
        }

        let mut updated = game.clone();
        updated.updated_at = now;
        updated.version = game.version + 1;
        Ok(updated)
    }

    /// Deletes a game.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Game doesn't exist
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting game");

        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Game", id));
        }

        Ok(())
    }

    /// Counts all games (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = test_db().await;
        let repo = db.games();

        let game = Game::new("Portal".to_string(), 1_999);
        repo.insert(&game).await.unwrap();

        let loaded = repo.get(&game.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Portal");
        assert_eq!(loaded.price_cents, 1_999);
        assert_eq!(loaded.original_price_cents, 1_999);
        assert_eq!(loaded.version, 0);

        assert!(repo.get("missing-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_title() {
        let db = test_db().await;
        let repo = db.games();

        repo.insert(&Game::new("Zork".to_string(), 999)).await.unwrap();
        repo.insert(&Game::new("Asteroids".to_string(), 499))
            .await
            .unwrap();

        let games = repo.list().await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].title, "Asteroids");
        assert_eq!(games[1].title, "Zork");
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let db = test_db().await;
        let repo = db.games();

        let mut game = Game::new("Portal".to_string(), 1_999);
        repo.insert(&game).await.unwrap();

        game.title = "Portal 2".to_string();
        let updated = repo.update(&game).await.unwrap();
        assert_eq!(updated.version, 1);

        let loaded = repo.get(&game.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Portal 2");
        assert_eq!(loaded.version, 1);
    }

    #[tokio::test]
    async fn test_stale_update_surfaces_conflict() {
        let db = test_db().await;
        let repo = db.games();

        let game = Game::new("Portal".to_string(), 1_999);
        repo.insert(&game).await.unwrap();

        // First writer wins and bumps the version.
        repo.update(&game).await.unwrap();

        // Second writer still holds version 0.
        let err = repo.update(&game).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_stale_update_after_delete_is_not_found() {
        let db = test_db().await;
        let repo = db.games();

        let game = Game::new("Portal".to_string(), 1_999);
        repo.insert(&game).await.unwrap();
        repo.delete(&game.id).await.unwrap();

        let err = repo.update(&game).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;
        let err = db.games().delete("missing-id").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
