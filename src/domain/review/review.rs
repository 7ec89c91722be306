//! Review entity and posting rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, ReviewId, ReviewRating, Timestamp, ValidationError};
use crate::domain::user::Username;

/// A user's review of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub game_id: GameId,
    pub username: Username,
    pub rating: ReviewRating,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Validated input for posting a review.
///
/// The one-review-per-user-per-game rule is checked by the handler against
/// the repository; the draft validates the fields themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub game_id: GameId,
    pub username: Username,
    pub rating: ReviewRating,
    pub comment: String,
}

impl ReviewDraft {
    const MAX_COMMENT: usize = 2000;

    /// Validates review input: rating in 1..=5, comment non-blank.
    pub fn new(
        game_id: GameId,
        username: Username,
        rating: i16,
        comment: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let rating = ReviewRating::try_from_i16(rating)?;
        let comment = comment.into().trim().to_string();
        if comment.is_empty() {
            return Err(ValidationError::empty_field("comment"));
        }
        if comment.chars().count() > Self::MAX_COMMENT {
            return Err(ValidationError::too_long("comment", Self::MAX_COMMENT));
        }
        Ok(Self {
            game_id,
            username,
            rating,
            comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    #[test]
    fn draft_accepts_valid_input() {
        let draft = ReviewDraft::new(GameId::from_i64(1), alice(), 4, "Great soundtrack").unwrap();
        assert_eq!(draft.rating.value(), 4);
        assert_eq!(draft.comment, "Great soundtrack");
    }

    #[test]
    fn draft_rejects_out_of_range_rating() {
        assert!(ReviewDraft::new(GameId::from_i64(1), alice(), 0, "meh").is_err());
        assert!(ReviewDraft::new(GameId::from_i64(1), alice(), 6, "wow").is_err());
    }

    #[test]
    fn draft_rejects_blank_comment() {
        assert!(ReviewDraft::new(GameId::from_i64(1), alice(), 3, "   ").is_err());
    }

    #[test]
    fn draft_trims_the_comment() {
        let draft = ReviewDraft::new(GameId::from_i64(1), alice(), 3, "  solid  ").unwrap();
        assert_eq!(draft.comment, "solid");
    }

    #[test]
    fn draft_rejects_overlong_comment() {
        let long = "x".repeat(2001);
        assert!(ReviewDraft::new(GameId::from_i64(1), alice(), 3, long).is_err());
    }
}
