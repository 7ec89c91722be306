//! HTTP handlers for the plan endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::plan::{
    ConfirmPlanCommand, SelectPlanCommand, ViewCheckoutQuery,
};
use crate::domain::foundation::DomainError;
use crate::domain::plan;

use super::super::error::ErrorResponse;
use super::super::extract::ClientSession;
use super::super::state::AppState;
use super::dto::{
    CheckoutParams, CheckoutResponse, ConfirmPlanRequest, ConfirmPlanResponse,
    PlanDescriptorResponse, PlanListResponse, SelectPlanResponse,
};

/// GET /api/plans - All tiers plus the viewer's current one.
pub async fn list_plans(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, PlanApiError> {
    let session = match session_id {
        Some(id) => state.sessions.load(id).await?.unwrap_or_default(),
        None => Default::default(),
    };

    let response = PlanListResponse {
        tiers: plan::descriptors()
            .into_iter()
            .map(PlanDescriptorResponse::from)
            .collect(),
        current: session.display_tier().label().to_string(),
    };
    Ok(Json(response))
}

/// POST /api/plans/select/{tier} - Stage a tier ahead of checkout.
pub async fn select_plan(
    State(state): State<AppState>,
    Path(tier): Path<String>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.select_plan_handler();
    let result = handler
        .handle(SelectPlanCommand {
            tier: Some(tier),
            session_id,
        })
        .await?;

    let response = SelectPlanResponse {
        session_id: result.session_id.to_string(),
        selected: result.selected.label().to_string(),
    };
    Ok(Json(response))
}

/// GET /api/plans/checkout?tier= - The checkout page state.
pub async fn view_checkout(
    State(state): State<AppState>,
    Query(params): Query<CheckoutParams>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.view_checkout_handler();
    let view = handler
        .handle(ViewCheckoutQuery {
            tier: params.tier,
            session_id,
        })
        .await?;

    let response = CheckoutResponse {
        session_id: view.session_id.to_string(),
        tiers: view
            .tiers
            .into_iter()
            .map(PlanDescriptorResponse::from)
            .collect(),
        selected: PlanDescriptorResponse::from(view.selected),
        current: PlanDescriptorResponse::from(view.current),
        is_upgrade: view.resolution.is_upgrade,
    };
    Ok(Json(response))
}

/// POST /api/plans/confirm - Commit the plan change.
pub async fn confirm_plan(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
    Json(request): Json<ConfirmPlanRequest>,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.confirm_plan_handler();
    let result = handler
        .handle(ConfirmPlanCommand {
            tier: request.tier,
            session_id,
        })
        .await?;

    let response = ConfirmPlanResponse {
        session_id: result.session_id.to_string(),
        plan: PlanDescriptorResponse::from(result.descriptor),
    };
    Ok(Json(response))
}

/// API error type for the plan endpoints.
///
/// Plan resolution itself cannot fail; only the session store can, so
/// everything maps to an infrastructure response.
pub struct PlanApiError(DomainError);

impl From<DomainError> for PlanApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlanApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self.0, "plan endpoint failed");
        let body = ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
