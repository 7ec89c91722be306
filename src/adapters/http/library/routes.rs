//! Axum router for the library endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{add_to_library, list_library};

/// Routes mounted under `/api`.
pub fn library_routes() -> Router<AppState> {
    Router::new()
        .route("/library", get(list_library))
        .route("/library/add", post(add_to_library))
}
