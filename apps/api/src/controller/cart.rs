//! # Cart Controllers
//!
//! Handlers for cart lifecycle and line item endpoints.
//!
//! | Method | Path                              | Handler                |
//! |--------|-----------------------------------|------------------------|
//! | POST   | /api/carts                        | `create_cart`          |
//! | GET    | /api/carts/{id}                   | `get_cart`             |
//! | DELETE | /api/carts/{id}                   | `delete_cart`          |
//! | POST   | /api/carts/{id}/items             | `add_item`             |
//! | PUT    | /api/carts/{id}/items/{item_id}   | `update_item_quantity` |
//! | DELETE | /api/carts/{id}/items/{item_id}   | `remove_item`          |
//! | POST   | /api/carts/{id}/finalize          | `finalize_cart`        |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamevault_core::{Cart, CartItem};

use crate::error::AppResult;
use crate::service::{CartService, CartView};
use crate::state::AppState;

// =============================================================================
// DTOs
// =============================================================================

/// Cart DTO with its line items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finalized: bool,
    pub finalized_at: Option<DateTime<Utc>>,
    pub total_cents: i64,
    pub version: i64,
    pub items: Vec<CartItemDto>,
}

/// Cart line item DTO.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: String,
    pub game_id: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        let line_total_cents = item.line_total_cents();
        CartItemDto {
            id: item.id,
            game_id: item.game_id,
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            line_total_cents,
            created_at: item.created_at,
        }
    }
}

impl CartDto {
    fn from_parts(cart: Cart, items: Vec<CartItem>) -> Self {
        CartDto {
            id: cart.id,
            user_id: cart.user_id,
            created_at: cart.created_at,
            finalized: cart.finalized,
            finalized_at: cart.finalized_at,
            total_cents: cart.total_cents,
            version: cart.version,
            items: items.into_iter().map(CartItemDto::from).collect(),
        }
    }
}

impl From<CartView> for CartDto {
    fn from(view: CartView) -> Self {
        CartDto::from_parts(view.cart, view.items)
    }
}

/// Request body for creating a cart. `{}` creates an anonymous cart.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCartDto {
    pub user_id: Option<String>,
}

/// Request body for adding a line item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemDto {
    pub game_id: String,
    pub quantity: i64,
}

/// Request body for changing a line item's quantity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub quantity: i64,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/carts - creates an empty cart.
pub async fn create_cart(
    State(state): State<AppState>,
    Json(body): Json<CreateCartDto>,
) -> AppResult<impl IntoResponse> {
    let cart = CartService::new(state.db).create(body.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(CartDto::from_parts(cart, Vec::new())),
    ))
}

/// GET /api/carts/{id} - fetches a cart with its items, 404 when absent.
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartDto>> {
    let view = CartService::new(state.db).get(&id).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/carts/{id} - deletes a cart and its items.
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    CartService::new(state.db).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/carts/{id}/items - adds a game to the cart.
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddItemDto>,
) -> AppResult<impl IntoResponse> {
    let view = CartService::new(state.db)
        .add_item(&id, &body.game_id, body.quantity)
        .await?;
    Ok((StatusCode::CREATED, Json(CartDto::from(view))))
}

/// PUT /api/carts/{id}/items/{item_id} - changes a line item's quantity.
pub async fn update_item_quantity(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(body): Json<UpdateItemDto>,
) -> AppResult<Json<CartDto>> {
    let view = CartService::new(state.db)
        .update_item_quantity(&id, &item_id, body.quantity)
        .await?;
    Ok(Json(view.into()))
}

/// DELETE /api/carts/{id}/items/{item_id} - removes a line item.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<CartDto>> {
    let view = CartService::new(state.db).remove_item(&id, &item_id).await?;
    Ok(Json(view.into()))
}

/// POST /api/carts/{id}/finalize - freezes the cart.
pub async fn finalize_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartDto>> {
    let view = CartService::new(state.db).finalize(&id).await?;
    Ok(Json(view.into()))
}
