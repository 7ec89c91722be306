//! Game catalog entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, ValidationError};

/// A title in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub hero_url: Option<String>,
    pub rating_avg: Option<f64>,
    /// Free-text tier marker entered by catalog administrators. May hold
    /// any alias; normalized only at comparison time, never on write.
    pub subscription_tier: Option<String>,
}

impl Game {
    /// Returns the raw required-tier string for access checks.
    pub fn required_tier(&self) -> Option<&str> {
        self.subscription_tier.as_deref()
    }

    /// Checks whether a case-insensitive search term matches title or description.
    pub fn matches_query(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    /// Checks whether this game belongs to a genre (case-insensitive).
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genre
            .as_ref()
            .is_some_and(|g| g.eq_ignore_ascii_case(genre))
    }
}

/// Validated input for creating or updating a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub hero_url: Option<String>,
    pub subscription_tier: Option<String>,
}

impl GameDraft {
    const MAX_TITLE: usize = 150;
    const MAX_GENRE: usize = 80;
    const MAX_DESCRIPTION: usize = 4000;
    const MAX_URL: usize = 500;
    const MAX_TIER: usize = 20;

    /// Validates the draft, trimming the title and dropping blank optionals.
    pub fn new(
        title: impl Into<String>,
        genre: Option<String>,
        description: Option<String>,
        cover_url: Option<String>,
        hero_url: Option<String>,
        subscription_tier: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.chars().count() > Self::MAX_TITLE {
            return Err(ValidationError::too_long("title", Self::MAX_TITLE));
        }

        let genre = non_blank(genre);
        if exceeds(&genre, Self::MAX_GENRE) {
            return Err(ValidationError::too_long("genre", Self::MAX_GENRE));
        }
        let description = non_blank(description);
        if exceeds(&description, Self::MAX_DESCRIPTION) {
            return Err(ValidationError::too_long("description", Self::MAX_DESCRIPTION));
        }
        let cover_url = non_blank(cover_url);
        if exceeds(&cover_url, Self::MAX_URL) {
            return Err(ValidationError::too_long("cover_url", Self::MAX_URL));
        }
        let hero_url = non_blank(hero_url);
        if exceeds(&hero_url, Self::MAX_URL) {
            return Err(ValidationError::too_long("hero_url", Self::MAX_URL));
        }
        let subscription_tier = non_blank(subscription_tier);
        if exceeds(&subscription_tier, Self::MAX_TIER) {
            return Err(ValidationError::too_long("subscription_tier", Self::MAX_TIER));
        }

        Ok(Self {
            title,
            genre,
            description,
            cover_url,
            hero_url,
            subscription_tier,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn exceeds(value: &Option<String>, max: usize) -> bool {
    value.as_ref().is_some_and(|v| v.chars().count() > max)
}

/// Returns the sorted distinct genre list for a catalog slice.
pub fn distinct_genres(games: &[Game]) -> Vec<String> {
    let mut genres: Vec<String> = games
        .iter()
        .filter_map(|g| g.genre.clone())
        .filter(|g| !g.trim().is_empty())
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(title: &str, genre: Option<&str>, description: Option<&str>) -> Game {
        Game {
            id: GameId::from_i64(1),
            title: title.to_string(),
            genre: genre.map(String::from),
            description: description.map(String::from),
            cover_url: None,
            hero_url: None,
            rating_avg: None,
            subscription_tier: None,
        }
    }

    #[test]
    fn matches_query_searches_title_case_insensitively() {
        let g = game("Neon Drift", None, None);
        assert!(g.matches_query("neon"));
        assert!(g.matches_query("DRIFT"));
        assert!(!g.matches_query("racing"));
    }

    #[test]
    fn matches_query_searches_description_too() {
        let g = game("Neon Drift", None, Some("A synthwave racing game"));
        assert!(g.matches_query("Racing"));
    }

    #[test]
    fn matches_genre_is_case_insensitive() {
        let g = game("Neon Drift", Some("Racing"), None);
        assert!(g.matches_genre("racing"));
        assert!(!g.matches_genre("rpg"));
    }

    #[test]
    fn matches_genre_is_false_without_genre() {
        assert!(!game("Neon Drift", None, None).matches_genre("racing"));
    }

    #[test]
    fn draft_requires_a_title() {
        assert!(GameDraft::new("", None, None, None, None, None).is_err());
        assert!(GameDraft::new("   ", None, None, None, None, None).is_err());
    }

    #[test]
    fn draft_trims_the_title() {
        let draft = GameDraft::new("  Neon Drift  ", None, None, None, None, None).unwrap();
        assert_eq!(draft.title, "Neon Drift");
    }

    #[test]
    fn draft_rejects_overlong_title() {
        let long = "x".repeat(151);
        assert!(GameDraft::new(long, None, None, None, None, None).is_err());
    }

    #[test]
    fn draft_drops_blank_optionals() {
        let draft = GameDraft::new(
            "Neon Drift",
            Some("  ".to_string()),
            Some("".to_string()),
            None,
            None,
            Some("retro pack".to_string()),
        )
        .unwrap();
        assert_eq!(draft.genre, None);
        assert_eq!(draft.description, None);
        assert_eq!(draft.subscription_tier, Some("retro pack".to_string()));
    }

    #[test]
    fn draft_stores_tier_string_as_entered() {
        // Normalization belongs to comparison time, not persistence.
        let draft =
            GameDraft::new("Neon Drift", None, None, None, None, Some("ULTIMATE".to_string()))
                .unwrap();
        assert_eq!(draft.subscription_tier, Some("ULTIMATE".to_string()));
    }

    #[test]
    fn distinct_genres_sorts_and_dedupes() {
        let games = vec![
            game("A", Some("Racing"), None),
            game("B", Some("Action"), None),
            game("C", Some("Racing"), None),
            game("D", None, None),
        ];
        assert_eq!(distinct_genres(&games), ["Action", "Racing"]);
    }
}
