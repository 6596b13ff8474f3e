//! # Cart Aggregation
//!
//! Derives a cart's total value from its line items and enforces the
//! finalization rules.
//!
//! The invariant: while a cart is open, `total_cents` equals the sum of
//! `unit_price × quantity` over its items, recomputed on every item
//! mutation. Once finalized the cart is immutable and the total is frozen.

use chrono::Utc;

use crate::error::CoreError;
use crate::types::{Cart, CartItem};

/// Sums the line subtotals of a set of cart items, in cents.
pub fn total_cents(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.line_total_cents()).sum()
}

impl Cart {
    /// Returns an error when the cart has been finalized.
    ///
    /// Every mutation of a cart or its items checks this first.
    pub fn ensure_open(&self) -> Result<(), CoreError> {
        if self.finalized {
            return Err(CoreError::CartFinalized {
                cart_id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Recomputes `total_cents` from the given items.
    ///
    /// Called whenever an item is added, removed, or its quantity changes.
    /// Fails on a finalized cart.
    pub fn recompute_total(&mut self, items: &[CartItem]) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.total_cents = total_cents(items);
        Ok(())
    }

    /// Finalizes the cart: freezes the total and stamps the finalization
    /// time. Irreversible; finalizing twice is an error.
    pub fn finalize(&mut self) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.finalized = true;
        self.finalized_at = Some(Utc::now());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Game;

    fn item(cart: &Cart, unit_cents: i64, quantity: i64) -> CartItem {
        let game = Game::new(format!("Game at {unit_cents}"), unit_cents);
        CartItem::for_game(&cart.id, &game, quantity)
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(total_cents(&[]), 0);
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        // {unitPrice: 10.00, qty: 2} + {unitPrice: 5.00, qty: 1} = 25.00
        let cart = Cart::new(None);
        let items = [item(&cart, 1_000, 2), item(&cart, 500, 1)];
        assert_eq!(total_cents(&items), 2_500);
    }

    #[test]
    fn test_recompute_total_updates_cart() {
        let mut cart = Cart::new(None);
        let items = [item(&cart, 1_000, 2), item(&cart, 500, 1)];

        cart.recompute_total(&items).unwrap();
        assert_eq!(cart.total_cents, 2_500);

        cart.recompute_total(&items[..1]).unwrap();
        assert_eq!(cart.total_cents, 2_000);
    }

    #[test]
    fn test_finalize_freezes_cart() {
        let mut cart = Cart::new(Some("user-1".to_string()));
        let items = [item(&cart, 1_000, 1)];
        cart.recompute_total(&items).unwrap();

        cart.finalize().unwrap();
        assert!(cart.finalized);
        assert!(cart.finalized_at.is_some());
        assert_eq!(cart.total_cents, 1_000);

        // Frozen: no further recomputation or finalization.
        assert!(cart.recompute_total(&[]).is_err());
        assert!(cart.finalize().is_err());
        assert_eq!(cart.total_cents, 1_000);
    }
}
