//! Route table for the GameVault API.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::controller::{cart, game};
use crate::state::AppState;

/// Builds the application router.
///
/// Static segments (`/api/games/banner`, `/api/games/discount`) take
/// priority over the `{id}` capture on the same prefix.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/api/games", get(game::list_games).post(game::create_game))
        .route(
            "/api/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        // Discounts and banner (gameId in the query string)
        .route("/api/games/banner", post(game::upload_banner))
        .route("/api/games/discount", put(game::apply_discount))
        .route("/api/games/discount/remove", put(game::remove_discount))
        // Carts
        .route("/api/carts", post(cart::create_cart))
        .route(
            "/api/carts/{id}",
            get(cart::get_cart).delete(cart::delete_cart),
        )
        .route("/api/carts/{id}/items", post(cart::add_item))
        .route(
            "/api/carts/{id}/items/{item_id}",
            put(cart::update_item_quantity).delete(cart::remove_item),
        )
        .route("/api/carts/{id}/finalize", post(cart::finalize_cart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
