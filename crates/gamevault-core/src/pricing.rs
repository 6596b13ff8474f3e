//! # Pricing Module
//!
//! The discount percent type and the game repricing operations.
//!
//! ## One Derivation, Three Call Sites
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Every write that touches price or discount funnels through the     │
//! │  same derivation:                                                   │
//! │                                                                     │
//! │    price = original_price.discounted(percent)                       │
//! │                                                                     │
//! │  apply_discount ──┐                                                 │
//! │  remove_discount ─┼──► Money::discounted ──► game.price_cents       │
//! │  upsert (capture)─┘                                                 │
//! │                                                                     │
//! │  original_price_cents is the source of truth; price_cents is        │
//! │  derived and never edited directly.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Game;

// =============================================================================
// Discount Percent
// =============================================================================

/// A whole-number discount percentage in the range 0 to 100.
///
/// Construction validates the range, so a `DiscountPercent` held anywhere in
/// the system is always valid. Modeled as a single-field newtype like
/// [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountPercent(i64);

impl DiscountPercent {
    /// Creates a discount percent, rejecting values outside 0-100.
    ///
    /// ## Example
    /// ```rust
    /// use gamevault_core::pricing::DiscountPercent;
    ///
    /// assert!(DiscountPercent::new(25).is_ok());
    /// assert!(DiscountPercent::new(0).is_ok());
    /// assert!(DiscountPercent::new(100).is_ok());
    /// assert!(DiscountPercent::new(-1).is_err());
    /// assert!(DiscountPercent::new(101).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: 0,
                max: 100,
            });
        }
        Ok(DiscountPercent(value))
    }

    /// Returns the percent as a plain integer.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Zero percent (no discount).
    #[inline]
    pub const fn zero() -> Self {
        DiscountPercent(0)
    }

    /// Checks whether this is a zero discount.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        DiscountPercent::zero()
    }
}

// =============================================================================
// Game Repricing Operations
// =============================================================================

impl Game {
    /// Applies a discount to the game.
    ///
    /// Sets `discount_percent` and recomputes `price_cents` from
    /// `original_price_cents`. The stored original price is untouched.
    pub fn apply_discount(&mut self, percent: DiscountPercent) {
        self.discount_percent = percent.value();
        self.price_cents = self.original_price().discounted(percent).cents();
    }

    /// Clears any discount from the game.
    ///
    /// Sets `discount_percent` to zero and restores `price_cents` to
    /// `original_price_cents`. Idempotent: calling twice leaves the same
    /// state as calling once.
    pub fn remove_discount(&mut self) {
        self.discount_percent = 0;
        self.price_cents = self.original_price_cents;
    }

    /// Normalizes pricing on create / full update.
    ///
    /// Always copies the submitted `price_cents` into
    /// `original_price_cents`, then reapplies the discount derivation.
    /// Clients must therefore submit the undiscounted price on every
    /// update: submitting an already-discounted price overwrites the
    /// stored original price with it. That contract is inherited from the
    /// upstream API and is covered by a test in `apps/api`.
    pub fn capture_original_price(&mut self, percent: DiscountPercent) {
        self.original_price_cents = self.price_cents;
        self.apply_discount(percent);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Game;

    fn pct(value: i64) -> DiscountPercent {
        DiscountPercent::new(value).unwrap()
    }

    fn game_at(original_cents: i64) -> Game {
        let mut game = Game::new("Half-Life 3".to_string(), original_cents);
        game.original_price_cents = original_cents;
        game
    }

    #[test]
    fn test_percent_range() {
        for value in 0..=100 {
            assert!(DiscountPercent::new(value).is_ok());
        }
        assert!(DiscountPercent::new(-1).is_err());
        assert!(DiscountPercent::new(101).is_err());
        assert!(DiscountPercent::new(1000).is_err());
    }

    #[test]
    fn test_apply_discount_derives_price() {
        // originalPrice = 100.00, discount = 25 → price = 75.00
        let mut game = game_at(10_000);
        game.apply_discount(pct(25));

        assert_eq!(game.discount_percent, 25);
        assert_eq!(game.price_cents, 7_500);
        assert_eq!(game.original_price_cents, 10_000);
    }

    #[test]
    fn test_remove_discount_restores_original() {
        let mut game = game_at(10_000);
        game.apply_discount(pct(25));
        game.remove_discount();

        assert_eq!(game.discount_percent, 0);
        assert_eq!(game.price_cents, 10_000);
    }

    #[test]
    fn test_remove_discount_is_idempotent() {
        let mut game = game_at(10_000);
        game.apply_discount(pct(40));

        game.remove_discount();
        let after_once = game.clone();
        game.remove_discount();

        assert_eq!(game.price_cents, after_once.price_cents);
        assert_eq!(game.discount_percent, after_once.discount_percent);
        assert_eq!(game.original_price_cents, after_once.original_price_cents);
    }

    #[test]
    fn test_apply_then_remove_round_trips() {
        let mut game = game_at(5_999);
        game.apply_discount(pct(33));
        game.remove_discount();

        assert_eq!(game.price_cents, game.original_price_cents);
        assert_eq!(game.discount_percent, 0);
    }

    #[test]
    fn test_capture_original_price_without_discount() {
        let mut game = game_at(10_000);
        game.price_cents = 12_000; // client submits a new base price

        game.capture_original_price(DiscountPercent::zero());

        assert_eq!(game.original_price_cents, 12_000);
        assert_eq!(game.price_cents, 12_000);
    }

    #[test]
    fn test_capture_original_price_reapplies_discount() {
        let mut game = game_at(10_000);
        game.price_cents = 20_000;

        game.capture_original_price(pct(50));

        assert_eq!(game.original_price_cents, 20_000);
        assert_eq!(game.price_cents, 10_000);
        assert_eq!(game.discount_percent, 50);
    }

    #[test]
    fn test_capture_overwrites_original_from_submitted_price() {
        // Documents the inherited contract: submitting the discounted price
        // on an update corrupts the stored original price.
        let mut game = game_at(10_000);
        game.apply_discount(pct(25)); // price is now 7 500

        // A client echoes the discounted price back on a full update.
        game.capture_original_price(pct(25));

        assert_eq!(game.original_price_cents, 7_500);
        assert_eq!(game.price_cents, 5_625);
    }
}
