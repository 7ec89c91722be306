//! SaveGameHandler - Command handler for adding catalog games.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Game, GameDraft};
use crate::ports::GameRepository;

/// Command to add a game to the catalog.
#[derive(Debug, Clone)]
pub struct SaveGameCommand {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub hero_url: Option<String>,
    /// Free-text tier marker; stored as entered, normalized at comparison time.
    pub subscription_tier: Option<String>,
}

/// Result of saving a game.
#[derive(Debug, Clone)]
pub struct SaveGameResult {
    pub game: Game,
}

/// Handler for catalog administration.
pub struct SaveGameHandler {
    games: Arc<dyn GameRepository>,
}

impl SaveGameHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(&self, cmd: SaveGameCommand) -> Result<SaveGameResult, CatalogError> {
        let draft = GameDraft::new(
            cmd.title,
            cmd.genre,
            cmd.description,
            cmd.cover_url,
            cmd.hero_url,
            cmd.subscription_tier,
        )?;

        let game = self
            .games
            .create(&draft)
            .await
            .map_err(|e| CatalogError::infrastructure(e.to_string()))?;

        tracing::info!(game_id = %game.id, title = %game.title, "game saved");
        Ok(SaveGameResult { game })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGameRepository;

    fn cmd(title: &str, tier: Option<&str>) -> SaveGameCommand {
        SaveGameCommand {
            title: title.to_string(),
            genre: None,
            description: None,
            cover_url: None,
            hero_url: None,
            subscription_tier: tier.map(String::from),
        }
    }

    #[tokio::test]
    async fn saves_a_valid_game() {
        let handler = SaveGameHandler::new(Arc::new(InMemoryGameRepository::new()));
        let result = handler.handle(cmd("Neon Drift", Some("AAA Pack"))).await.unwrap();
        assert_eq!(result.game.title, "Neon Drift");
        assert_eq!(result.game.subscription_tier.as_deref(), Some("AAA Pack"));
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let handler = SaveGameHandler::new(Arc::new(InMemoryGameRepository::new()));
        let err = handler.handle(cmd("  ", None)).await.unwrap_err();
        assert!(matches!(err, CatalogError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn keeps_tier_marker_verbatim() {
        // Administrators may enter any alias; normalization happens at read time
        let handler = SaveGameHandler::new(Arc::new(InMemoryGameRepository::new()));
        let result = handler.handle(cmd("Old Gem", Some("ULTIMATE"))).await.unwrap();
        assert_eq!(result.game.subscription_tier.as_deref(), Some("ULTIMATE"));
    }
}
