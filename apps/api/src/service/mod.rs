//! Service layer.
//!
//! Services orchestrate the domain logic from gamevault-core against the
//! persistence and blob-store collaborators. Controllers stay thin: they
//! deserialize, call a service, and serialize.

pub mod banner;
pub mod cart;
pub mod catalog;

pub use banner::BannerService;
pub use cart::{CartService, CartView};
pub use catalog::{CatalogService, UpsertGameParams};
