//! # gamevault-db: Database Layer for GameVault
//!
//! This crate is the persistence collaborator of the storefront. It owns
//! the SQLite connection pool, the embedded migrations, and the
//! repositories for games, carts and cart items.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      GameVault Data Flow                            │
//! │                                                                     │
//! │  API service (catalog / cart)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  gamevault-db (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │  ┌─────────────┐   ┌───────────────┐   ┌──────────────┐    │   │
//! │  │  │  Database   │   │ Repositories  │   │  Migrations  │    │   │
//! │  │  │  (pool.rs)  │◄──│ game.rs       │   │  (embedded)  │    │   │
//! │  │  │  SqlitePool │   │ cart.rs       │   │  001_init…   │    │   │
//! │  │  └─────────────┘   └───────────────┘   └──────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (WAL mode, foreign keys on)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Optimistic Concurrency
//!
//! Every entity row carries a `version` counter. Updates run as
//! `UPDATE ... WHERE id = ? AND version = ?`; when no row matches, the
//! repository re-checks existence to distinguish a concurrent delete
//! ([`DbError::NotFound`]) from a concurrent modification
//! ([`DbError::Conflict`]). Conflicts are surfaced to the caller, never
//! silently retried.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gamevault_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/store.db")).await?;
//! let games = db.games().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::game::GameRepository;
