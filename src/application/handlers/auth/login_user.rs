//! LoginUserHandler - Command handler for signing in.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionData;
use crate::domain::user::{AuthError, Username};
use crate::ports::{PasswordHasher, SessionStore, UserRepository};

/// Command to sign a user in.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub session_id: SessionId,
    pub username: Username,
}

/// Handler for logging users in.
///
/// A successful login creates a fresh server-side session holding the
/// username; plan state starts empty and is filled by the plan flow.
pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            users,
            hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, AuthError> {
        let username = Username::new(cmd.username).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .users
            .find_by_username(&username)
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let session_id = self
            .sessions
            .create(SessionData::for_user(username.clone()))
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))?;

        tracing::info!(username = %username, "user signed in");
        Ok(LoginUserResult {
            session_id,
            username,
        })
    }
}

/// Handler for signing a user out.
pub struct LogoutUserHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutUserHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Destroys the session. Unknown ids are a no-op.
    pub async fn handle(&self, session_id: SessionId) -> Result<(), AuthError> {
        self.sessions
            .destroy(session_id)
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))
    }
}
