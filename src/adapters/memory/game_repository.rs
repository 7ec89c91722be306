//! In-memory game repository for tests and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::domain::catalog::{Game, GameDraft};
use crate::domain::foundation::{DomainError, GameId};
use crate::ports::GameRepository;

/// In-memory implementation of [`GameRepository`].
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Acceptable for test
/// and development use; production uses the Postgres adapter.
pub struct InMemoryGameRepository {
    games: RwLock<Vec<Game>>,
    next_id: AtomicI64,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            games: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds the repository with existing games (test helper).
    pub fn with_games(games: Vec<Game>) -> Self {
        let max_id = games.iter().map(|g| g.id.as_i64()).max().unwrap_or(0);
        Self {
            games: RwLock::new(games),
            next_id: AtomicI64::new(max_id + 1),
        }
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn find_all(&self) -> Result<Vec<Game>, DomainError> {
        Ok(self.games.read().expect("games lock poisoned").clone())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self
            .games
            .read()
            .expect("games lock poisoned")
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn create(&self, draft: &GameDraft) -> Result<Game, DomainError> {
        let game = Game {
            id: GameId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: draft.title.clone(),
            genre: draft.genre.clone(),
            description: draft.description.clone(),
            cover_url: draft.cover_url.clone(),
            hero_url: draft.hero_url.clone(),
            rating_avg: None,
            subscription_tier: draft.subscription_tier.clone(),
        };
        self.games
            .write()
            .expect("games lock poisoned")
            .push(game.clone());
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> GameDraft {
        GameDraft::new(title, None, None, None, None, None).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryGameRepository::new();
        let a = repo.create(&draft("A")).await.unwrap();
        let b = repo.create(&draft("B")).await.unwrap();
        assert_eq!(a.id.as_i64(), 1);
        assert_eq!(b.id.as_i64(), 2);
    }

    #[tokio::test]
    async fn find_by_id_returns_created_game() {
        let repo = InMemoryGameRepository::new();
        let created = repo.create(&draft("A")).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let repo = InMemoryGameRepository::new();
        assert_eq!(repo.find_by_id(GameId::from_i64(99)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn with_games_continues_id_sequence() {
        let seeded = Game {
            id: GameId::from_i64(10),
            title: "Seeded".to_string(),
            genre: None,
            description: None,
            cover_url: None,
            hero_url: None,
            rating_avg: None,
            subscription_tier: None,
        };
        let repo = InMemoryGameRepository::with_games(vec![seeded]);
        let next = repo.create(&draft("Next")).await.unwrap();
        assert_eq!(next.id.as_i64(), 11);
    }
}
