//! Game reviews.

mod errors;
mod review;

pub use errors::ReviewError;
pub use review::{Review, ReviewDraft};
