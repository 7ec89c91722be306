//! Review command and query handlers.

mod list_reviews;
mod post_review;

pub use list_reviews::{ListReviewsHandler, ListReviewsQuery, ListReviewsResult};
pub use post_review::{PostReviewCommand, PostReviewHandler, PostReviewResult};
