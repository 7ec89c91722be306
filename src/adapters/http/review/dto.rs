//! JSON request/response types for the review endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

/// Query parameters for listing reviews.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReviewsParams {
    /// Restrict to one game's reviews.
    pub game_id: Option<i64>,
}

/// Request to post a review.
#[derive(Debug, Clone, Deserialize)]
pub struct PostReviewRequest {
    pub game_id: i64,
    /// Star rating, 1 to 5.
    pub rating: i16,
    pub comment: String,
}

/// One review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub game_id: i64,
    pub username: String,
    pub rating: i16,
    pub comment: String,
    /// ISO 8601 creation time.
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.as_i64(),
            game_id: review.game_id.as_i64(),
            username: review.username.to_string(),
            rating: review.rating.value(),
            comment: review.comment,
            created_at: review.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Reviews, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewResponse>,
}
