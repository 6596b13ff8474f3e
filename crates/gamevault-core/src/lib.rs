//! # gamevault-core: Pure Business Logic for GameVault
//!
//! This crate is the heart of the GameVault storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      GameVault Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                          │   │
//! │  │   /games ──► /games/discount ──► /games/banner ──► /carts   │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ gamevault-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────────────┐  │   │
//! │  │  │  types  │ │  money  │ │ pricing │ │ cart / validation│  │   │
//! │  │  │  Game   │ │  Money  │ │ Discount│ │  totals, rules   │  │   │
//! │  │  │  Cart   │ │  cents  │ │ Percent │ │                  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │      gamevault-db (SQLite)      gamevault-media (files)     │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Game, Cart, CartItem)
//! - [`money`] - Money type with integer cent arithmetic (no floating point!)
//! - [`pricing`] - Discount percent type and the sale price derivation
//! - [`cart`] - Cart total aggregation and finalization rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::DiscountPercent;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item in a cart.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// File extensions accepted for game banner uploads, lowercase with the
/// leading dot.
pub const ALLOWED_BANNER_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Media type prefix a banner upload must declare.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
