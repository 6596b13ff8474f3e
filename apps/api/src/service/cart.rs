//! # Cart Service
//!
//! Cart lifecycle and line item mutations.
//!
//! Every item mutation follows the same cycle: load the cart, refuse if it
//! is finalized, mutate the item rows, recompute the total from the rows,
//! and save the cart through its versioned update. The total therefore
//! always matches the items while the cart is open; finalization freezes
//! both.

use tracing::info;

use gamevault_core::{validation, Cart, CartItem};
use gamevault_db::Database;

use crate::error::{AppError, AppResult};

/// A cart together with its line items.
#[derive(Debug, Clone)]
pub struct CartView {
    pub cart: Cart,
    pub items: Vec<CartItem>,
}

/// Service for cart management.
#[derive(Debug, Clone)]
pub struct CartService {
    db: Database,
}

impl CartService {
    /// Creates a new CartService.
    pub fn new(db: Database) -> Self {
        CartService { db }
    }

    /// Creates a new empty cart.
    pub async fn create(&self, user_id: Option<String>) -> AppResult<Cart> {
        let cart = Cart::new(user_id);
        self.db.carts().insert(&cart).await?;

        info!(cart_id = %cart.id, "Cart created");
        Ok(cart)
    }

    /// Fetches a cart with its items.
    ///
    /// ## Errors
    /// * `NotFound` - No cart with this id
    pub async fn get(&self, cart_id: &str) -> AppResult<CartView> {
        let cart = self.fetch_cart(cart_id).await?;
        let items = self.db.carts().items(cart_id).await?;
        Ok(CartView { cart, items })
    }

    /// Deletes a cart and all of its items.
    pub async fn delete(&self, cart_id: &str) -> AppResult<()> {
        Ok(self.db.carts().delete(cart_id).await?)
    }

    /// Adds a game to a cart, snapshotting the game's current sale price.
    ///
    /// Adding a game that is already in the cart increases that line's
    /// quantity instead of creating a second line.
    pub async fn add_item(&self, cart_id: &str, game_id: &str, quantity: i64) -> AppResult<CartView> {
        validation::validate_quantity(quantity)?;

        let cart = self.fetch_cart(cart_id).await?;
        cart.ensure_open()?;

        let game = self
            .db
            .games()
            .get(game_id)
            .await?
            .ok_or_else(|| AppError::not_found("Game", game_id))?;

        let items = self.db.carts().items(cart_id).await?;
        if let Some(existing) = items.iter().find(|item| item.game_id == game.id) {
            let merged = existing.quantity + quantity;
            validation::validate_quantity(merged)?;
            self.db
                .carts()
                .update_item_quantity(cart_id, &existing.id, merged)
                .await?;
        } else {
            let item = CartItem::for_game(cart_id, &game, quantity);
            self.db.carts().insert_item(&item).await?;
        }

        self.refresh_total(cart).await
    }

    /// Changes the quantity of a line item.
    pub async fn update_item_quantity(
        &self,
        cart_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> AppResult<CartView> {
        validation::validate_quantity(quantity)?;

        let cart = self.fetch_cart(cart_id).await?;
        cart.ensure_open()?;

        self.db
            .carts()
            .update_item_quantity(cart_id, item_id, quantity)
            .await?;

        self.refresh_total(cart).await
    }

    /// Removes a line item from a cart.
    pub async fn remove_item(&self, cart_id: &str, item_id: &str) -> AppResult<CartView> {
        let cart = self.fetch_cart(cart_id).await?;
        cart.ensure_open()?;

        self.db.carts().delete_item(cart_id, item_id).await?;

        self.refresh_total(cart).await
    }

    /// Finalizes a cart: freezes the total, stamps the finalization time.
    ///
    /// ## Errors
    /// * `NotFound` - No cart with this id
    /// * 400 when the cart is already finalized
    pub async fn finalize(&self, cart_id: &str) -> AppResult<CartView> {
        let mut cart = self.fetch_cart(cart_id).await?;
        let items = self.db.carts().items(cart_id).await?;

        cart.finalize()?;
        let cart = self.db.carts().update(&cart).await?;

        info!(cart_id = %cart.id, total = cart.total_cents, "Cart finalized");
        Ok(CartView { cart, items })
    }

    async fn fetch_cart(&self, cart_id: &str) -> AppResult<Cart> {
        self.db
            .carts()
            .get(cart_id)
            .await?
            .ok_or_else(|| AppError::not_found("Cart", cart_id))
    }

    /// Recomputes the total from the current item rows and saves the cart.
    async fn refresh_total(&self, mut cart: Cart) -> AppResult<CartView> {
        let items = self.db.carts().items(&cart.id).await?;
        cart.recompute_total(&items)?;
        let cart = self.db.carts().update(&cart).await?;
        Ok(CartView { cart, items })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::catalog::{CatalogService, UpsertGameParams};
    use gamevault_core::Game;
    use gamevault_db::{DbConfig, DbError};

    struct Fixture {
        catalog: CatalogService,
        carts: CartService,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database");
        Fixture {
            catalog: CatalogService::new(db.clone()),
            carts: CartService::new(db),
        }
    }

    async fn seeded_game(fx: &Fixture, title: &str, price_cents: i64) -> Game {
        fx.catalog
            .create(UpsertGameParams {
                id: None,
                title: title.to_string(),
                description: None,
                price_cents,
                discount_percent: 0,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_total_tracks_item_mutations() {
        let fx = fixture().await;
        let ten = seeded_game(&fx, "Ten", 1_000).await;
        let five = seeded_game(&fx, "Five", 500).await;
        let cart = fx.carts.create(None).await.unwrap();

        // {10.00 × 2} + {5.00 × 1} = 25.00
        fx.carts.add_item(&cart.id, &ten.id, 2).await.unwrap();
        let view = fx.carts.add_item(&cart.id, &five.id, 1).await.unwrap();
        assert_eq!(view.cart.total_cents, 2_500);
        assert_eq!(view.items.len(), 2);

        // Quantity change recomputes.
        let ten_line = view
            .items
            .iter()
            .find(|item| item.game_id == ten.id)
            .unwrap()
            .clone();
        let view = fx
            .carts
            .update_item_quantity(&cart.id, &ten_line.id, 1)
            .await
            .unwrap();
        assert_eq!(view.cart.total_cents, 1_500);

        // Removal recomputes.
        let view = fx.carts.remove_item(&cart.id, &ten_line.id).await.unwrap();
        assert_eq!(view.cart.total_cents, 500);
        assert_eq!(view.items.len(), 1);
    }

    #[tokio::test]
    async fn test_adding_same_game_merges_lines() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(None).await.unwrap();

        fx.carts.add_item(&cart.id, &game.id, 2).await.unwrap();
        let view = fx.carts.add_item(&cart.id, &game.id, 3).await.unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 5);
        assert_eq!(view.cart.total_cents, 5_000);
    }

    #[tokio::test]
    async fn test_item_snapshots_price_at_add_time() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(None).await.unwrap();

        fx.carts.add_item(&cart.id, &game.id, 1).await.unwrap();

        // A later discount does not move the cart line.
        fx.catalog.apply_discount(&game.id, 50).await.unwrap();

        let view = fx.carts.get(&cart.id).await.unwrap();
        assert_eq!(view.items[0].unit_price_cents, 1_000);
        assert_eq!(view.cart.total_cents, 1_000);
    }

    #[tokio::test]
    async fn test_finalize_freezes_cart() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(Some("user-1".to_string())).await.unwrap();
        fx.carts.add_item(&cart.id, &game.id, 2).await.unwrap();

        let view = fx.carts.finalize(&cart.id).await.unwrap();
        assert!(view.cart.finalized);
        assert!(view.cart.finalized_at.is_some());
        assert_eq!(view.cart.total_cents, 2_000);

        // Every further mutation is rejected.
        assert!(fx.carts.add_item(&cart.id, &game.id, 1).await.is_err());
        assert!(fx
            .carts
            .remove_item(&cart.id, &view.items[0].id)
            .await
            .is_err());
        assert!(fx.carts.finalize(&cart.id).await.is_err());

        let after = fx.carts.get(&cart.id).await.unwrap();
        assert_eq!(after.cart.total_cents, 2_000);
    }

    #[tokio::test]
    async fn test_rejects_bad_quantity() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(None).await.unwrap();

        assert!(fx.carts.add_item(&cart.id, &game.id, 0).await.is_err());
        assert!(fx.carts.add_item(&cart.id, &game.id, -2).await.is_err());
        assert!(fx.carts.add_item(&cart.id, &game.id, 1_000).await.is_err());

        let view = fx.carts.get(&cart.id).await.unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.cart.total_cents, 0);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(None).await.unwrap();

        let err = fx
            .carts
            .add_item("missing-cart", &game.id, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = fx
            .carts
            .add_item(&cart.id, "missing-game", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = fx
            .carts
            .remove_item(&cart.id, "missing-item")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_cart_removes_items() {
        let fx = fixture().await;
        let game = seeded_game(&fx, "Portal", 1_000).await;
        let cart = fx.carts.create(None).await.unwrap();
        fx.carts.add_item(&cart.id, &game.id, 1).await.unwrap();

        fx.carts.delete(&cart.id).await.unwrap();

        let err = fx.carts.get(&cart.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
