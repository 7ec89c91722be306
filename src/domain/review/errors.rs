//! Review errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SignInRequired | 401 |
//! | GameNotFound | 404 |
//! | AlreadyReviewed | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{GameId, ValidationError};

/// Errors from review operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The request has no signed-in user.
    SignInRequired,

    /// Game was not found.
    GameNotFound(GameId),

    /// The user already reviewed this game.
    AlreadyReviewed(GameId),

    /// Review input failed validation.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ReviewError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReviewError::Infrastructure(message.into())
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            ReviewError::SignInRequired => "Please sign in to review.".to_string(),
            ReviewError::GameNotFound(_) => "Game not found".to_string(),
            ReviewError::AlreadyReviewed(_) => "You already reviewed this game".to_string(),
            ReviewError::ValidationFailed { message, .. } => message.clone(),
            ReviewError::Infrastructure(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<ValidationError> for ReviewError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooLong { field, .. } => field.clone(),
        };
        ReviewError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReviewError {}
