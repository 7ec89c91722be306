//! Authentication and registration errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | UsernameTaken | 409 |
//! | InvalidCredentials | 401 |
//! | Infrastructure | 500 |

use crate::domain::foundation::ValidationError;

/// Errors from the register/login flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password failed validation.
    ValidationFailed { field: String, message: String },

    /// Username is already registered.
    UsernameTaken(String),

    /// Username unknown or password mismatch.
    ///
    /// Deliberately carries no detail about which of the two failed.
    InvalidCredentials,

    /// Infrastructure error.
    Infrastructure(String),
}

impl AuthError {
    pub fn username_taken(username: impl Into<String>) -> Self {
        AuthError::UsernameTaken(username.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthError::Infrastructure(message.into())
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            AuthError::ValidationFailed { message, .. } => message.clone(),
            AuthError::UsernameTaken(_) => "Username already exists".to_string(),
            AuthError::InvalidCredentials => "Invalid username or password".to_string(),
            AuthError::Infrastructure(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooLong { field, .. } => field.clone(),
        };
        AuthError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}
