//! JSON request/response types for the catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::catalog::GameDetailResult;
use crate::domain::catalog::Game;

use super::super::review::dto::ReviewResponse;

/// Query parameters for browsing the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseParams {
    /// Case-insensitive search over title and description.
    pub q: Option<String>,
    /// Case-insensitive genre filter.
    pub genre: Option<String>,
}

/// Request to add a game to the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub hero_url: Option<String>,
    /// Free-text tier marker; stored as entered.
    #[serde(default)]
    pub subscription_tier: Option<String>,
}

/// One catalog game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub hero_url: Option<String>,
    pub rating_avg: Option<f64>,
    pub subscription_tier: Option<String>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id.as_i64(),
            title: game.title,
            genre: game.genre,
            description: game.description,
            cover_url: game.cover_url,
            hero_url: game.hero_url,
            rating_avg: game.rating_avg,
            subscription_tier: game.subscription_tier,
        }
    }
}

/// Catalog page: filtered games plus the genre filter options.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseResponse {
    pub games: Vec<GameResponse>,
    pub genres: Vec<String>,
}

/// Game detail page with viewer-specific access flags.
#[derive(Debug, Clone, Serialize)]
pub struct GameDetailResponse {
    pub game: GameResponse,
    pub reviews: Vec<ReviewResponse>,
    /// Raw tier marker on the game record, echoed for display.
    pub required_tier: Option<String>,
    /// The viewer's normalized plan label.
    pub plan_tier: String,
    pub can_access: bool,
    pub in_library: bool,
    pub already_reviewed: bool,
}

impl From<GameDetailResult> for GameDetailResponse {
    fn from(result: GameDetailResult) -> Self {
        Self {
            game: GameResponse::from(result.game),
            reviews: result.reviews.into_iter().map(ReviewResponse::from).collect(),
            required_tier: result.required_tier,
            plan_tier: result.plan_tier.label().to_string(),
            can_access: result.can_access,
            in_library: result.in_library,
            already_reviewed: result.already_reviewed,
        }
    }
}
