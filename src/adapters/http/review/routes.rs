//! Axum router for the review endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{list_reviews, post_review};

/// Routes mounted under `/api`.
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews).post(post_review))
}
