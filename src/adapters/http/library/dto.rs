//! JSON request/response types for the library endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::library::LibraryItem;

use super::super::catalog::dto::GameResponse;

/// Request to add a game to the library.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToLibraryRequest {
    pub game_id: i64,
}

/// Result of an add; `already_present` marks the idempotent case.
#[derive(Debug, Clone, Serialize)]
pub struct AddToLibraryResponse {
    pub game_id: i64,
    pub already_present: bool,
}

/// One saved game with when it was added.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryItemResponse {
    pub game: GameResponse,
    /// ISO 8601 time the game was saved.
    pub added_at: String,
}

impl From<LibraryItem> for LibraryItemResponse {
    fn from(item: LibraryItem) -> Self {
        Self {
            game: GameResponse::from(item.game),
            added_at: item.entry.added_at.as_datetime().to_rfc3339(),
        }
    }
}

/// The user's library, oldest entry first.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryResponse {
    pub items: Vec<LibraryItemResponse>,
}
