//! HTTP handlers for the auth endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::auth::{LoginUserCommand, RegisterUserCommand};
use crate::domain::user::AuthError;

use super::super::error::ErrorResponse;
use super::super::extract::ClientSession;
use super::super::state::AppState;
use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// POST /api/auth/register - Create a new account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let handler = state.register_user_handler();
    let result = handler
        .handle(RegisterUserCommand {
            username: request.username,
            password: request.password,
        })
        .await?;

    let response = RegisterResponse {
        username: result.username.to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Sign in and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let handler = state.login_user_handler();
    let result = handler
        .handle(LoginUserCommand {
            username: request.username,
            password: request.password,
        })
        .await?;

    let response = LoginResponse {
        session_id: result.session_id.to_string(),
        username: result.username.to_string(),
    };
    Ok(Json(response))
}

/// POST /api/auth/logout - Destroy the current session.
///
/// Logging out without a session is a no-op, not an error.
pub async fn logout(
    State(state): State<AppState>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, AuthApiError> {
    if let Some(session_id) = session_id {
        state.logout_user_handler().handle(session_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// API error type that converts auth errors to HTTP responses.
pub struct AuthApiError(AuthError);

impl From<AuthError> for AuthApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            AuthError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            AuthError::UsernameTaken(_) => (StatusCode::CONFLICT, "USERNAME_TAKEN"),
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AuthError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
