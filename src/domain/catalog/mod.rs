//! Game catalog domain.

mod errors;
mod game;

pub use errors::CatalogError;
pub use game::{distinct_genres, Game, GameDraft};
