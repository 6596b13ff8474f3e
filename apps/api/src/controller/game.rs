//! # Game Controllers
//!
//! Handlers for the catalog, discount and banner upload endpoints.
//!
//! | Method | Path                        | Handler           |
//! |--------|-----------------------------|-------------------|
//! | GET    | /api/games                  | `list_games`      |
//! | GET    | /api/games/{id}             | `get_game`        |
//! | POST   | /api/games                  | `create_game`     |
//! | PUT    | /api/games/{id}             | `update_game`     |
//! | DELETE | /api/games/{id}             | `delete_game`     |
//! | POST   | /api/games/banner           | `upload_banner`   |
//! | PUT    | /api/games/discount         | `apply_discount`  |
//! | PUT    | /api/games/discount/remove  | `remove_discount` |
//!
//! The banner and discount endpoints address the game through a `gameId`
//! query parameter rather than a path segment; that shape is part of the
//! public API.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamevault_core::Game;

use crate::error::{AppError, AppResult};
use crate::service::{BannerService, CatalogService, UpsertGameParams};
use crate::state::AppState;

// =============================================================================
// DTOs
// =============================================================================

/// Game DTO returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub original_price_cents: i64,
    pub discount_percent: i64,
    pub banner_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        GameDto {
            id: game.id,
            title: game.title,
            description: game.description,
            price_cents: game.price_cents,
            original_price_cents: game.original_price_cents,
            discount_percent: game.discount_percent,
            banner_path: game.banner_path,
            created_at: game.created_at,
            updated_at: game.updated_at,
            version: game.version,
        }
    }
}

/// Request body for creating or fully updating a game.
///
/// `priceCents` carries the undiscounted price; the server derives the
/// sale price from it and `discountPercent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGameDto {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub discount_percent: i64,
}

impl From<UpsertGameDto> for UpsertGameParams {
    fn from(dto: UpsertGameDto) -> Self {
        UpsertGameParams {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            price_cents: dto.price_cents,
            discount_percent: dto.discount_percent,
        }
    }
}

/// `?gameId=...` query parameter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameIdParams {
    pub game_id: String,
}

/// `?gameId=...&percent=...` query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountParams {
    pub game_id: String,
    pub percent: i64,
}

/// Response body for a successful banner upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerUploadedDto {
    pub file_path: String,
}

// =============================================================================
// Catalog Handlers
// =============================================================================

/// GET /api/games - lists all games.
pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<Vec<GameDto>>> {
    let games = CatalogService::new(state.db).list().await?;
    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}

/// GET /api/games/{id} - fetches one game, 404 when absent.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GameDto>> {
    let game = CatalogService::new(state.db).get(&id).await?;
    Ok(Json(game.into()))
}

/// POST /api/games - creates a game.
pub async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<UpsertGameDto>,
) -> AppResult<impl IntoResponse> {
    let game = CatalogService::new(state.db).create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(GameDto::from(game))))
}

/// PUT /api/games/{id} - full update; 400 when path and body ids differ.
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpsertGameDto>,
) -> AppResult<StatusCode> {
    CatalogService::new(state.db).update(&id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/games/{id} - deletes a game, 404 when absent.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    CatalogService::new(state.db).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Discount Handlers
// =============================================================================

/// PUT /api/games/discount?gameId={id}&percent={n} - applies a discount.
pub async fn apply_discount(
    State(state): State<AppState>,
    Query(params): Query<DiscountParams>,
) -> AppResult<Json<GameDto>> {
    let game = CatalogService::new(state.db)
        .apply_discount(&params.game_id, params.percent)
        .await?;
    Ok(Json(game.into()))
}

/// PUT /api/games/discount/remove?gameId={id} - clears the discount.
pub async fn remove_discount(
    State(state): State<AppState>,
    Query(params): Query<GameIdParams>,
) -> AppResult<Json<GameDto>> {
    let game = CatalogService::new(state.db)
        .remove_discount(&params.game_id)
        .await?;
    Ok(Json(game.into()))
}

// =============================================================================
// Banner Handler
// =============================================================================

/// POST /api/games/banner?gameId={id} - uploads a banner image.
///
/// Expects a multipart body with a `file` part carrying the image.
pub async fn upload_banner(
    State(state): State<AppState>,
    Query(params): Query<GameIdParams>,
    mut multipart: Multipart,
) -> AppResult<Json<BannerUploadedDto>> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::BadRequest(err.to_string()))?;
            upload = Some((filename, content_type, bytes.to_vec()));
            break;
        }
    }

    let (filename, content_type, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("file part is required".to_string()))?;

    let path = BannerService::new(state.db, state.blobs)
        .upload(&params.game_id, &filename, &content_type, &bytes)
        .await?;

    Ok(Json(BannerUploadedDto { file_path: path }))
}
