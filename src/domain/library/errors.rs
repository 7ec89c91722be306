//! Library errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SignInRequired | 401 |
//! | GameNotFound | 404 |
//! | TierRequired | 403 |
//! | Infrastructure | 500 |

use crate::domain::foundation::GameId;
use crate::domain::plan::PlanTier;

/// Errors from library operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The request has no signed-in user.
    SignInRequired,

    /// Game was not found.
    GameNotFound(GameId),

    /// The game is gated above the user's plan.
    TierRequired {
        /// Normalized tier the game requires.
        required: PlanTier,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl LibraryError {
    pub fn tier_required(required: PlanTier) -> Self {
        LibraryError::TierRequired { required }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        LibraryError::Infrastructure(message.into())
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            LibraryError::SignInRequired => {
                "Please sign in to add games to your library.".to_string()
            }
            LibraryError::GameNotFound(_) => "Game not found".to_string(),
            LibraryError::TierRequired { required } => {
                format!("This game requires {} or higher.", required.label())
            }
            LibraryError::Infrastructure(_) => "An internal error occurred".to_string(),
        }
    }
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}
