//! HTTP handlers for the review endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::review::{ListReviewsQuery, PostReviewCommand};
use crate::domain::foundation::GameId;
use crate::domain::review::ReviewError;

use super::super::error::ErrorResponse;
use super::super::extract::ClientSession;
use super::super::state::AppState;
use super::dto::{ListReviewsParams, PostReviewRequest, ReviewListResponse, ReviewResponse};

/// GET /api/reviews?game_id= - List reviews, site-wide or per game.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListReviewsParams>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let handler = state.list_reviews_handler();
    let result = handler
        .handle(ListReviewsQuery {
            game_id: params.game_id.map(GameId::from_i64),
        })
        .await?;

    let response = ReviewListResponse {
        reviews: result.reviews.into_iter().map(ReviewResponse::from).collect(),
    };
    Ok(Json(response))
}

/// POST /api/reviews - Post a review for a game.
pub async fn post_review(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
    Json(request): Json<PostReviewRequest>,
) -> Result<impl IntoResponse, ReviewApiError> {
    let handler = state.post_review_handler();
    let result = handler
        .handle(PostReviewCommand {
            game_id: GameId::from_i64(request.game_id),
            session_id,
            rating: request.rating,
            comment: request.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(result.review))))
}

/// API error type that converts review errors to HTTP responses.
pub struct ReviewApiError(ReviewError);

impl From<ReviewError> for ReviewApiError {
    fn from(err: ReviewError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ReviewApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            ReviewError::SignInRequired => (StatusCode::UNAUTHORIZED, "SIGN_IN_REQUIRED"),
            ReviewError::GameNotFound(_) => (StatusCode::NOT_FOUND, "GAME_NOT_FOUND"),
            ReviewError::AlreadyReviewed(_) => (StatusCode::CONFLICT, "ALREADY_REVIEWED"),
            ReviewError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ReviewError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
