//! HTTP handlers for the library endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::library::{AddToLibraryCommand, ListLibraryQuery};
use crate::domain::foundation::GameId;
use crate::domain::library::LibraryError;

use super::super::error::ErrorResponse;
use super::super::extract::ClientSession;
use super::super::state::AppState;
use super::dto::{AddToLibraryRequest, AddToLibraryResponse, LibraryItemResponse, LibraryResponse};

/// GET /api/library - The signed-in user's saved games.
pub async fn list_library(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, LibraryApiError> {
    let handler = state.list_library_handler();
    let result = handler.handle(ListLibraryQuery { session_id }).await?;

    let response = LibraryResponse {
        items: result.items.into_iter().map(LibraryItemResponse::from).collect(),
    };
    Ok(Json(response))
}

/// POST /api/library/add - Save a game, subject to the tier gate.
pub async fn add_to_library(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
    Json(request): Json<AddToLibraryRequest>,
) -> Result<impl IntoResponse, LibraryApiError> {
    let handler = state.add_to_library_handler();
    let result = handler
        .handle(AddToLibraryCommand {
            game_id: GameId::from_i64(request.game_id),
            session_id,
        })
        .await?;

    let status = if result.already_present {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let response = AddToLibraryResponse {
        game_id: result.entry.game_id.as_i64(),
        already_present: result.already_present,
    };
    Ok((status, Json(response)))
}

/// API error type that converts library errors to HTTP responses.
pub struct LibraryApiError(LibraryError);

impl From<LibraryError> for LibraryApiError {
    fn from(err: LibraryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for LibraryApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            LibraryError::SignInRequired => (StatusCode::UNAUTHORIZED, "SIGN_IN_REQUIRED"),
            LibraryError::GameNotFound(_) => (StatusCode::NOT_FOUND, "GAME_NOT_FOUND"),
            LibraryError::TierRequired { .. } => (StatusCode::FORBIDDEN, "TIER_REQUIRED"),
            LibraryError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
