//! # Catalog Service
//!
//! Game CRUD and the discount operations.
//!
//! ## Pricing Side Effects
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create / update (full upsert)                                      │
//! │    original_price_cents ← submitted price_cents                     │
//! │    price_cents ← original.discounted(percent)                       │
//! │                                                                     │
//! │  apply_discount(id, percent)                                        │
//! │    discount_percent ← percent                                       │
//! │    price_cents ← original.discounted(percent)                       │
//! │                                                                     │
//! │  remove_discount(id)                                                │
//! │    discount_percent ← 0                                             │
//! │    price_cents ← original_price_cents                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upsert contract is inherited from the upstream API: the submitted
//! `price` is always treated as the new undiscounted price, even when a
//! discount is active. See the test at the bottom of this file.

use gamevault_core::{validation, DiscountPercent, Game};
use gamevault_db::Database;

use crate::error::{AppError, AppResult};

/// Parameters for creating or fully updating a game.
#[derive(Debug, Clone)]
pub struct UpsertGameParams {
    /// Entity id; optional on create (generated when absent), required on
    /// update (must match the path id).
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// The undiscounted price the client is submitting.
    pub price_cents: i64,
    /// Whole-number discount percent, 0-100.
    pub discount_percent: i64,
}

/// Service for catalog management and pricing.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Creates a new CatalogService.
    pub fn new(db: Database) -> Self {
        CatalogService { db }
    }

    /// Lists all games.
    pub async fn list(&self) -> AppResult<Vec<Game>> {
        Ok(self.db.games().list().await?)
    }

    /// Fetches a single game.
    ///
    /// ## Errors
    /// * `NotFound` - No game with this id
    pub async fn get(&self, id: &str) -> AppResult<Game> {
        self.db
            .games()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Game", id))
    }

    /// Creates a game.
    ///
    /// Captures the submitted price as the original price, then derives
    /// the sale price from the discount.
    pub async fn create(&self, params: UpsertGameParams) -> AppResult<Game> {
        validation::validate_title(&params.title)?;
        validation::validate_price_cents(params.price_cents)?;
        let percent = DiscountPercent::new(params.discount_percent)?;

        let mut game = Game::new(params.title, params.price_cents);
        if let Some(id) = params.id {
            validation::validate_uuid(&id)?;
            game.id = id;
        }
        game.description = params.description;
        game.capture_original_price(percent);

        self.db.games().insert(&game).await?;
        Ok(game)
    }

    /// Fully updates a game.
    ///
    /// ## Errors
    /// * `ValidationError` - Path id and body id disagree, bad title,
    ///   negative price, percent out of range
    /// * `NotFound` - No game with this id
    /// * `Conflict` - The game was modified concurrently
    pub async fn update(&self, path_id: &str, params: UpsertGameParams) -> AppResult<Game> {
        if params.id.as_deref() != Some(path_id) {
            return Err(gamevault_core::ValidationError::Mismatch {
                field: "id".to_string(),
            }
            .into());
        }
        validation::validate_title(&params.title)?;
        validation::validate_price_cents(params.price_cents)?;
        let percent = DiscountPercent::new(params.discount_percent)?;

        let mut game = self.get(path_id).await?;
        game.title = params.title;
        game.description = params.description;
        game.price_cents = params.price_cents;
        game.capture_original_price(percent);

        Ok(self.db.games().update(&game).await?)
    }

    /// Deletes a game.
    ///
    /// ## Errors
    /// * `NotFound` - No game with this id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        Ok(self.db.games().delete(id).await?)
    }

    /// Applies a discount to a game and persists the repriced entity.
    ///
    /// The existence check runs first, so an unknown game is reported as
    /// `NotFound` even when the percent is also bad.
    pub async fn apply_discount(&self, game_id: &str, percent: i64) -> AppResult<Game> {
        let mut game = self.get(game_id).await?;
        let percent = DiscountPercent::new(percent)?;

        game.apply_discount(percent);

        Ok(self.db.games().update(&game).await?)
    }

    /// Clears the discount from a game and persists it. Idempotent.
    pub async fn remove_discount(&self, game_id: &str) -> AppResult<Game> {
        let mut game = self.get(game_id).await?;

        game.remove_discount();

        Ok(self.db.games().update(&game).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gamevault_db::{DbConfig, DbError};

    async fn service() -> CatalogService {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database");
        CatalogService::new(db)
    }

    fn params(title: &str, price_cents: i64, discount_percent: i64) -> UpsertGameParams {
        UpsertGameParams {
            id: None,
            title: title.to_string(),
            description: None,
            price_cents,
            discount_percent,
        }
    }

    #[tokio::test]
    async fn test_create_without_discount() {
        let svc = service().await;

        let game = svc.create(params("Portal", 1_999, 0)).await.unwrap();

        assert_eq!(game.price_cents, 1_999);
        assert_eq!(game.original_price_cents, 1_999);
        assert_eq!(game.discount_percent, 0);
    }

    #[tokio::test]
    async fn test_create_with_discount_derives_price() {
        let svc = service().await;

        let game = svc.create(params("Portal", 10_000, 25)).await.unwrap();

        assert_eq!(game.original_price_cents, 10_000);
        assert_eq!(game.price_cents, 7_500);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_input() {
        let svc = service().await;

        assert!(svc.create(params("", 1_000, 0)).await.is_err());
        assert!(svc.create(params("Portal", -1, 0)).await.is_err());
        assert!(svc.create(params("Portal", 1_000, 101)).await.is_err());
    }

    #[tokio::test]
    async fn test_apply_discount_persists() {
        let svc = service().await;
        let game = svc.create(params("Portal", 10_000, 0)).await.unwrap();

        let updated = svc.apply_discount(&game.id, 25).await.unwrap();
        assert_eq!(updated.price_cents, 7_500);
        assert_eq!(updated.discount_percent, 25);

        // Persisted, not just returned.
        let loaded = svc.get(&game.id).await.unwrap();
        assert_eq!(loaded.price_cents, 7_500);
        assert_eq!(loaded.discount_percent, 25);
    }

    #[tokio::test]
    async fn test_apply_discount_out_of_range_leaves_state_untouched() {
        let svc = service().await;
        let game = svc.create(params("Portal", 10_000, 0)).await.unwrap();

        assert!(svc.apply_discount(&game.id, 101).await.is_err());
        assert!(svc.apply_discount(&game.id, -1).await.is_err());

        let loaded = svc.get(&game.id).await.unwrap();
        assert_eq!(loaded.price_cents, 10_000);
        assert_eq!(loaded.discount_percent, 0);
    }

    #[tokio::test]
    async fn test_apply_discount_unknown_game_is_not_found() {
        let svc = service().await;
        let err = svc
            .apply_discount("550e8400-e29b-41d4-a716-446655440000", 25)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_discount_restores_and_is_idempotent() {
        let svc = service().await;
        let game = svc.create(params("Portal", 10_000, 25)).await.unwrap();
        assert_eq!(game.price_cents, 7_500);

        let once = svc.remove_discount(&game.id).await.unwrap();
        assert_eq!(once.price_cents, 10_000);
        assert_eq!(once.discount_percent, 0);

        let twice = svc.remove_discount(&game.id).await.unwrap();
        assert_eq!(twice.price_cents, once.price_cents);
        assert_eq!(twice.discount_percent, once.discount_percent);
        assert_eq!(twice.original_price_cents, once.original_price_cents);
    }

    #[tokio::test]
    async fn test_update_requires_matching_ids() {
        let svc = service().await;
        let game = svc.create(params("Portal", 1_999, 0)).await.unwrap();

        let mut update = params("Portal 2", 2_999, 0);
        update.id = Some("a-different-id".to_string());

        let err = svc.update(&game.id, update).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_game_is_not_found() {
        let svc = service().await;
        let id = "550e8400-e29b-41d4-a716-446655440000";

        let mut update = params("Portal", 1_999, 0);
        update.id = Some(id.to_string());

        let err = svc.update(id, update).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_original_price_from_submitted_price() {
        // Documents the inherited upsert contract: an update that echoes
        // the discounted price back overwrites the stored original price.
        let svc = service().await;
        let game = svc.create(params("Portal", 10_000, 25)).await.unwrap();
        assert_eq!(game.price_cents, 7_500);

        let mut update = params("Portal", 7_500, 25);
        update.id = Some(game.id.clone());
        let updated = svc.update(&game.id, update).await.unwrap();

        assert_eq!(updated.original_price_cents, 7_500);
        assert_eq!(updated.price_cents, 5_625);
    }

    #[tokio::test]
    async fn test_stale_write_surfaces_conflict() {
        let svc = service().await;
        let game = svc.create(params("Portal", 10_000, 0)).await.unwrap();

        // Another writer bumps the version.
        svc.apply_discount(&game.id, 10).await.unwrap();

        // Writing through the stale copy conflicts.
        let err = svc.db.games().update(&game).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let svc = service().await;
        let game = svc.create(params("Portal", 1_999, 0)).await.unwrap();

        svc.delete(&game.id).await.unwrap();

        let err = svc.get(&game.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = svc.delete(&game.id).await.unwrap_err();
        assert!(matches!(err, AppError::Db(DbError::NotFound { .. })));
    }
}
