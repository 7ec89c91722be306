//! Axum router for the plan endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{confirm_plan, list_plans, select_plan, view_checkout};

/// Routes mounted under `/api`.
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", get(list_plans))
        .route("/plans/checkout", get(view_checkout))
        .route("/plans/select/:tier", post(select_plan))
        .route("/plans/confirm", post(confirm_plan))
}
