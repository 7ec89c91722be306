//! HTTP adapters - the JSON REST API.
//!
//! Each domain module has its own router/handlers/dto triple; everything is
//! assembled under `/api` by [`api_router`]. The session id travels in the
//! `X-Session-Id` header and is extracted by [`ClientSession`].

pub mod auth;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod library;
pub mod plan;
pub mod review;
pub mod state;

use axum::Router;

pub use error::ErrorResponse;
pub use extract::{ClientSession, SESSION_HEADER};
pub use state::AppState;

/// Assembles the full API router with the shared state applied.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::auth_routes())
        .merge(catalog::catalog_routes())
        .merge(library::library_routes())
        .merge(review::review_routes())
        .merge(plan::plan_routes());

    Router::new().nest("/api", api).with_state(state)
}
