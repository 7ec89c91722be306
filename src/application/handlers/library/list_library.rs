//! ListLibraryHandler - Query handler for the signed-in user's library page.

use std::sync::Arc;

use crate::domain::catalog::Game;
use crate::domain::foundation::SessionId;
use crate::domain::library::{LibraryEntry, LibraryError};
use crate::ports::{GameRepository, LibraryRepository, SessionStore};

/// Query for the current user's saved games.
#[derive(Debug, Clone)]
pub struct ListLibraryQuery {
    pub session_id: Option<SessionId>,
}

/// One library row joined with its game.
#[derive(Debug, Clone)]
pub struct LibraryItem {
    pub entry: LibraryEntry,
    pub game: Game,
}

/// The user's library, oldest entry first.
#[derive(Debug, Clone)]
pub struct ListLibraryResult {
    pub items: Vec<LibraryItem>,
}

pub struct ListLibraryHandler {
    games: Arc<dyn GameRepository>,
    library: Arc<dyn LibraryRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl ListLibraryHandler {
    pub fn new(
        games: Arc<dyn GameRepository>,
        library: Arc<dyn LibraryRepository>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            games,
            library,
            sessions,
        }
    }

    pub async fn handle(&self, query: ListLibraryQuery) -> Result<ListLibraryResult, LibraryError> {
        let session = match query.session_id {
            Some(id) => self
                .sessions
                .load(id)
                .await
                .map_err(|e| LibraryError::infrastructure(e.to_string()))?
                .unwrap_or_default(),
            None => Default::default(),
        };
        let username = session.username.ok_or(LibraryError::SignInRequired)?;

        let entries = self
            .library
            .find_by_username(&username)
            .await
            .map_err(|e| LibraryError::infrastructure(e.to_string()))?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            // Entries whose game has since been removed are dropped from the
            // view rather than failing the whole page.
            let game = self
                .games
                .find_by_id(entry.game_id)
                .await
                .map_err(|e| LibraryError::infrastructure(e.to_string()))?;
            if let Some(game) = game {
                items.push(LibraryItem { entry, game });
            }
        }

        Ok(ListLibraryResult { items })
    }
}
