//! Axum router for the catalog endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{browse_games, create_game, game_detail};

/// Routes mounted under `/api`.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(browse_games))
        .route("/games/:id", get(game_detail))
        .route("/admin/games", post(create_game))
}
