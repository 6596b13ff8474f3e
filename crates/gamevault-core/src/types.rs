//! # Domain Types
//!
//! Core domain types used throughout GameVault.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────────┐  ┌─────────────────┐  ┌─────────────────┐ │
//! │  │       Game          │  │      Cart       │  │    CartItem     │ │
//! │  │  ─────────────────  │  │  ─────────────  │  │  ─────────────  │ │
//! │  │  id (UUID)          │  │  id (UUID)      │  │  id (UUID)      │ │
//! │  │  title              │  │  user_id?       │  │  cart_id (FK)   │ │
//! │  │  price_cents        │  │  finalized      │  │  game_id (FK)   │ │
//! │  │  original_price_…   │  │  total_cents    │  │  unit_price_…   │ │
//! │  │  discount_percent   │  │  version        │  │  quantity       │ │
//! │  │  banner_path?       │  └─────────────────┘  └─────────────────┘ │
//! │  │  version            │                                           │
//! │  └─────────────────────┘   A cart exclusively owns its items:      │
//! │                            deleting the cart deletes them.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entity carries a `version` counter used for optimistic concurrency
//! detection at save time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Game
// =============================================================================

/// A game in the storefront catalog.
///
/// `original_price_cents` is the undiscounted source of truth;
/// `price_cents` is always derived from it (see [`crate::pricing`]) and
/// must never be edited without recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Game {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display title shown in the store.
    pub title: String,

    /// Optional store page description.
    pub description: Option<String>,

    /// Current sale price in cents (derived).
    pub price_cents: i64,

    /// Undiscounted reference price in cents (source of truth).
    pub original_price_cents: i64,

    /// Whole-number discount percent, 0-100.
    pub discount_percent: i64,

    /// Relative path of the uploaded banner image, if any.
    pub banner_path: Option<String>,

    /// When the game was created.
    pub created_at: DateTime<Utc>,

    /// When the game was last updated.
    pub updated_at: DateTime<Utc>,

    /// Optimistic concurrency counter, incremented on every update.
    pub version: i64,
}

impl Game {
    /// Creates a new undiscounted game with a generated id.
    pub fn new(title: String, price_cents: i64) -> Self {
        let now = Utc::now();
        Game {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            price_cents,
            original_price_cents: price_cents,
            discount_percent: 0,
            banner_path: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Returns the current sale price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the undiscounted reference price as Money.
    #[inline]
    pub fn original_price(&self) -> Money {
        Money::from_cents(self.original_price_cents)
    }

    /// Checks whether a discount is currently active.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart.
///
/// While not finalized, `total_cents` always equals the sum of the line
/// subtotals of the items it owns. Finalization freezes the total and is
/// irreversible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Cart {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning user, when the cart belongs to a signed-in customer.
    pub user_id: Option<String>,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,

    /// Whether the cart has been checked out and frozen.
    pub finalized: bool,

    /// When the cart was finalized.
    pub finalized_at: Option<DateTime<Utc>>,

    /// Aggregated value of all items, in cents.
    pub total_cents: i64,

    /// Optimistic concurrency counter, incremented on every update.
    pub version: i64,
}

impl Cart {
    /// Creates a new empty, open cart with a generated id.
    pub fn new(user_id: Option<String>) -> Self {
        Cart {
            id: Uuid::new_v4().to_string(),
            user_id,
            created_at: Utc::now(),
            finalized: false,
            finalized_at: None,
            total_cents: 0,
            version: 0,
        }
    }

    /// Returns the cart total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line item owned by exactly one cart.
///
/// `unit_price_cents` is a snapshot of the game's sale price at the moment
/// the item was added; later catalog price changes do not affect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CartItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning cart.
    pub cart_id: String,

    /// Game this line refers to.
    pub game_id: String,

    /// Unit price in cents at the time the item was added (frozen).
    pub unit_price_cents: i64,

    /// Quantity, always positive.
    pub quantity: i64,

    /// When this item was added.
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line item for a game, snapshotting its current sale price.
    pub fn for_game(cart_id: &str, game: &Game, quantity: i64) -> Self {
        CartItem {
            id: Uuid::new_v4().to_string(),
            cart_id: cart_id.to_string(),
            game_id: game.id.clone(),
            unit_price_cents: game.price_cents,
            quantity,
            created_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line subtotal (unit price × quantity) in cents.
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line subtotal as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_undiscounted() {
        let game = Game::new("Portal".to_string(), 1_999);
        assert_eq!(game.price_cents, 1_999);
        assert_eq!(game.original_price_cents, 1_999);
        assert_eq!(game.discount_percent, 0);
        assert!(!game.has_discount());
        assert_eq!(game.version, 0);
    }

    #[test]
    fn test_cart_item_snapshots_price() {
        let mut game = Game::new("Portal".to_string(), 1_999);
        let cart = Cart::new(None);
        let item = CartItem::for_game(&cart.id, &game, 2);

        // Catalog price changes after the fact do not move the snapshot.
        game.price_cents = 2_999;

        assert_eq!(item.unit_price_cents, 1_999);
        assert_eq!(item.line_total_cents(), 3_998);
    }
}
