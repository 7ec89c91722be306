//! JSON request/response types for the auth endpoints.

use serde::{Deserialize, Serialize};

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub username: String,
}

/// Request to sign in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful sign-in; the session id goes into `X-Session-Id` on
/// subsequent requests.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub username: String,
}
