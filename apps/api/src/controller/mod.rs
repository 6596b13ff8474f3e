//! HTTP controllers.
//!
//! Thin axum handlers: deserialize the request, call a service, shape the
//! response DTO. Response DTOs use camelCase field names.

pub mod cart;
pub mod game;
