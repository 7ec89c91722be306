//! Axum router for the auth endpoints.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{login, logout, register};

/// Routes mounted under `/api`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}
