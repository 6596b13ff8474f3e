//! # Cart Repository
//!
//! Database operations for carts and their line items.
//!
//! A cart exclusively owns its items: `cart_items.cart_id` carries
//! `ON DELETE CASCADE`, so deleting a cart removes its items in the same
//! statement. Cart updates are versioned like game updates; item rows are
//! only ever reached through their owning cart's read-modify-write cycle,
//! so they carry no version of their own.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use gamevault_core::{Cart, CartItem};

const CART_COLUMNS: &str =
    "id, user_id, created_at, finalized, finalized_at, total_cents, version";

const ITEM_COLUMNS: &str = "id, cart_id, game_id, unit_price_cents, quantity, created_at";

/// Repository for cart and cart item database operations.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Inserts a new cart.
    pub async fn insert(&self, cart: &Cart) -> DbResult<()> {
        debug!(id = %cart.id, "Inserting cart");

        sqlx::query(
            "INSERT INTO carts (
                id, user_id, created_at, finalized, finalized_at, total_cents, version
            ) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&cart.id)
        .bind(&cart.user_id)
        .bind(cart.created_at)
        .bind(cart.finalized)
        .bind(cart.finalized_at)
        .bind(cart.total_cents)
        .bind(cart.version)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a cart by its ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Cart>> {
        let cart = sqlx::query_as::<_, Cart>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cart)
    }

    /// Checks whether a cart row exists.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carts WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Saves an updated cart, enforcing optimistic concurrency.
    ///
    /// Same contract as `GameRepository::update`: `cart.version` is the
    /// version that was read, a zero-row update is re-checked to tell
    /// `Conflict` from `NotFound`.
    pub async fn update(&self, cart: &Cart) -> DbResult<Cart> {
        debug!(id = %cart.id, version = cart.version, "Updating cart");

        let result = sqlx::query(
            "UPDATE carts SET
                user_id = ?,
                finalized = ?,
                finalized_at = ?,
                total_cents = ?,
                version = version + 1
            WHERE id = ? AND version = ?",
        )
        .bind(&cart.user_id)
        .bind(cart.finalized)
        .bind(cart.finalized_at)
        .bind(cart.total_cents)
        .bind(&cart.id)
        .bind(cart.version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            if self.exists(&cart.id).await? {
                return Err(DbError::conflict("Cart", &cart.id));
            }
            return Err(DbError::not_found("Cart", &cart.id));
        }

        let mut updated = cart.clone();
        updated.version = cart.version + 1;
        Ok(updated)
    }

    /// Deletes a cart and, through the cascade, all of its items.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting cart");

        let result = sqlx::query("DELETE FROM carts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Cart", id));
        }

        Ok(())
    }

    // =========================================================================
    // Cart Item Operations
    // =========================================================================

    /// Lists the items of a cart, oldest first.
    pub async fn items(&self, cart_id: &str) -> DbResult<Vec<CartItem>> {
        let items = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM cart_items WHERE cart_id = ? ORDER BY created_at"
        ))
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets a single item belonging to a cart.
    pub async fn get_item(&self, cart_id: &str, item_id: &str) -> DbResult<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM cart_items WHERE id = ? AND cart_id = ?"
        ))
        .bind(item_id)
        .bind(cart_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new cart item.
    pub async fn insert_item(&self, item: &CartItem) -> DbResult<()> {
        debug!(id = %item.id, cart_id = %item.cart_id, "Inserting cart item");

        sqlx::query(
            "INSERT INTO cart_items (
                id, cart_id, game_id, unit_price_cents, quantity, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(&item.cart_id)
        .bind(&item.game_id)
        .bind(item.unit_price_cents)
        .bind(item.quantity)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Updates the quantity of a cart item.
    pub async fn update_item_quantity(
        &self,
        cart_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> DbResult<()> {
        debug!(id = %item_id, quantity, "Updating cart item quantity");

        let result =
            sqlx::query("UPDATE cart_items SET quantity = ? WHERE id = ? AND cart_id = ?")
                .bind(quantity)
                .bind(item_id)
                .bind(cart_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("CartItem", item_id));
        }

        Ok(())
    }

    /// Deletes a cart item.
    pub async fn delete_item(&self, cart_id: &str, item_id: &str) -> DbResult<()> {
        debug!(id = %item_id, "Deleting cart item");

        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND cart_id = ?")
            .bind(item_id)
            .bind(cart_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("CartItem", item_id));
        }

        Ok(())
    }

    /// Counts the items of a cart (for diagnostics).
    pub async fn count_items(&self, cart_id: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_items WHERE cart_id = ?")
            .bind(cart_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
