//! HTTP adapter for the review endpoints.
//!
//! - `GET /api/reviews?game_id=` - List reviews, site-wide or per game
//! - `POST /api/reviews` - Post a review (one per user per game)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::review_routes;
