//! BrowseCatalogHandler - Query handler for the catalog page.

use std::sync::Arc;

use crate::domain::catalog::{distinct_genres, CatalogError, Game};
use crate::ports::GameRepository;

/// Query to browse the catalog with optional filters.
#[derive(Debug, Clone, Default)]
pub struct BrowseCatalogQuery {
    /// Case-insensitive search over title and description.
    pub search: Option<String>,
    /// Case-insensitive genre filter.
    pub genre: Option<String>,
}

/// Catalog page data.
#[derive(Debug, Clone)]
pub struct BrowseCatalogResult {
    /// Games matching the filters.
    pub games: Vec<Game>,
    /// Sorted distinct genres across the whole catalog, for the filter UI.
    pub genres: Vec<String>,
}

/// Handler for browsing the catalog.
pub struct BrowseCatalogHandler {
    games: Arc<dyn GameRepository>,
}

impl BrowseCatalogHandler {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn handle(
        &self,
        query: BrowseCatalogQuery,
    ) -> Result<BrowseCatalogResult, CatalogError> {
        let all = self
            .games
            .find_all()
            .await
            .map_err(|e| CatalogError::infrastructure(e.to_string()))?;

        // The genre list always reflects the full catalog, not the filtered slice
        let genres = distinct_genres(&all);

        let mut games = all;
        if let Some(term) = query.search.as_deref().filter(|t| !t.trim().is_empty()) {
            games.retain(|g| g.matches_query(term));
        }
        if let Some(genre) = query.genre.as_deref().filter(|g| !g.trim().is_empty()) {
            games.retain(|g| g.matches_genre(genre));
        }

        Ok(BrowseCatalogResult { games, genres })
    }
}
