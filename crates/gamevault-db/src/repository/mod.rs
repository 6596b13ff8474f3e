//! # Repository Module
//!
//! Database repository implementations for GameVault.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  API service                                                        │
//! │       │   db.games().get(&id)                                       │
//! │       ▼                                                             │
//! │  GameRepository / CartRepository                                    │
//! │  ├── find / list                                                    │
//! │  ├── insert (add)                                                   │
//! │  ├── update (versioned save, surfaces conflicts)                    │
//! │  └── delete (remove)                                                │
//! │       │   SQL                                                       │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`game::GameRepository`] - Catalog CRUD with versioned updates
//! - [`cart::CartRepository`] - Cart and cart item operations

pub mod cart;
pub mod game;
