//! Catalog query and command handlers.

mod browse_catalog;
mod get_game_detail;
mod save_game;

pub use browse_catalog::{BrowseCatalogHandler, BrowseCatalogQuery, BrowseCatalogResult};
pub use get_game_detail::{GameDetailResult, GetGameDetailHandler, GetGameDetailQuery};
pub use save_game::{SaveGameCommand, SaveGameHandler, SaveGameResult};
