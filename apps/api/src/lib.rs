//! # GameVault API
//!
//! REST server for the GameVault storefront.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        GameVault API                                │
//! │                                                                     │
//! │  HTTP ──► router ──► controller ──► service ──► db / media          │
//! │                          │             │                            │
//! │                        DTOs      domain logic                       │
//! │                    (camelCase)   (gamevault-core)                   │
//! │                                                                     │
//! │  Errors: ValidationError → 400, NotFound → 404, Conflict → 409,     │
//! │          everything else → 500 (detail logged server-side)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod service;
pub mod state;
