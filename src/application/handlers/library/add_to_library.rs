//! AddToLibraryHandler - Command handler for the tier-gated library add.

use std::sync::Arc;

use crate::domain::foundation::{GameId, SessionId};
use crate::domain::library::{LibraryEntry, LibraryError};
use crate::domain::plan::PlanTier;
use crate::ports::{GameRepository, LibraryRepository, SessionStore};

/// Command to add a game to the signed-in user's library.
#[derive(Debug, Clone)]
pub struct AddToLibraryCommand {
    pub game_id: GameId,
    pub session_id: Option<SessionId>,
}

/// Result of an add-to-library attempt.
#[derive(Debug, Clone)]
pub struct AddToLibraryResult {
    pub entry: LibraryEntry,
    /// True when the game was already in the library (idempotent add).
    pub already_present: bool,
}

/// Handler for adding games to a library.
///
/// This is the content-access decision point: the game's raw tier marker is
/// weighed against the user's plan through the tier policy before any entry
/// is written.
pub struct AddToLibraryHandler {
    games: Arc<dyn GameRepository>,
    library: Arc<dyn LibraryRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AddToLibraryHandler {
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

    pub async fn handle(&self, cmd: AddToLibraryCommand) -> Result<AddToLibraryResult, LibraryError> {
        let session = match cmd.session_id {
            Some(id) => self
                .sessions
                .load(id)
                .await
                .map_err(|e| LibraryError::infrastructure(e.to_string()))?
                .unwrap_or_default(),
            None => Default::default(),
        };
        let username = session
            .username
            .clone()
            .ok_or(LibraryError::SignInRequired)?;

        let game = self
            .games
            .find_by_id(cmd.game_id)
            .await
            .map_err(|e| LibraryError::infrastructure(e.to_string()))?
            .ok_or(LibraryError::GameNotFound(cmd.game_id))?;

        // A user with no stored plan holds Free; a game whose marker does
        // not normalize carries no gate, so denial always names a real tier.
        let current = session.display_tier();
        if !PlanTier::can_access(game.required_tier(), Some(current.label())) {
            if let Some(required) = PlanTier::normalize(game.required_tier()) {
                tracing::debug!(
                    game_id = %cmd.game_id,
                    required = %required,
                    current = %current,
                    "library add denied by tier gate"
                );
                return Err(LibraryError::tier_required(required));
            }
        }

        if let Some(existing) = self
            .library
            .find_entry(&username, cmd.game_id)
            .await
            .map_err(|e| LibraryError::infrastructure(e.to_string()))?
        {
            return Ok(AddToLibraryResult {
                entry: existing,
                already_present: true,
            });
        }

        let entry = self
            .library
            .create(&username, cmd.game_id)
            .await
            .map_err(|e| LibraryError::infrastructure(e.to_string()))?;

        tracing::info!(game_id = %cmd.game_id, username = %entry.username, "game added to library");
        Ok(AddToLibraryResult {
            entry,
            already_present: false,
        })
    }
}
