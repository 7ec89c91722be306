//! RegisterUserHandler - Command handler for account registration.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::user::{AuthError, UserAccount, Username};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub username: Username,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, AuthError> {
        let username = Username::new(cmd.username)?;
        if cmd.password.trim().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let taken = self
            .users
            .exists(&username)
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))?;
        if taken {
            return Err(AuthError::username_taken(username.as_str()));
        }

        let account = UserAccount::new(username.clone(), self.hasher.hash(&cmd.password));
        self.users
            .create(&account)
            .await
            .map_err(|e| AuthError::infrastructure(e.to_string()))?;

        tracing::info!(username = %username, "user registered");
        Ok(RegisterUserResult { username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::HmacPasswordHasher;
    use crate::adapters::memory::InMemoryUserRepository;

    fn handler_with(users: Arc<InMemoryUserRepository>) -> RegisterUserHandler {
        RegisterUserHandler::new(users, Arc::new(HmacPasswordHasher::new("test-pepper")))
    }

    fn cmd(username: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_a_new_account() {
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = handler_with(users.clone());

        let result = handler.handle(cmd("alice", "hunter2")).await.unwrap();
        assert_eq!(result.username.as_str(), "alice");
        assert!(users
            .exists(&Username::new("alice").unwrap())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn stores_a_hash_not_the_password() {
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = handler_with(users.clone());
        handler.handle(cmd("alice", "hunter2")).await.unwrap();

        let account = users
            .find_by_username(&Username::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_ne!(account.password_hash.as_str(), "hunter2");
        assert!(!account.password_hash.as_str().contains("hunter2"));
    }

    #[tokio::test]
    async fn rejects_blank_username() {
        let handler = handler_with(Arc::new(InMemoryUserRepository::new()));
        let err = handler.handle(cmd("   ", "hunter2")).await.unwrap_err();
        assert!(matches!(err, AuthError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn rejects_blank_password() {
        let handler = handler_with(Arc::new(InMemoryUserRepository::new()));
        let err = handler.handle(cmd("alice", "  ")).await.unwrap_err();
        assert!(matches!(err, AuthError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn rejects_duplicate_username() {
        let handler = handler_with(Arc::new(InMemoryUserRepository::new()));
        handler.handle(cmd("alice", "hunter2")).await.unwrap();

        let err = handler.handle(cmd("alice", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken(_)));
    }
}
