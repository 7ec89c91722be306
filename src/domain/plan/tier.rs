//! Plan tier definitions and the tier comparison policy.
//!
//! Tiers form a fixed total order: `Free < Retro < Indie < AAA`. All tier
//! comparison in the application goes through [`PlanTier::weight_of`] and
//! [`PlanTier::can_access`]; raw tier strings are never compared directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription plan tier.
///
/// Determines which slice of the catalog a user can access. Stored tier
/// strings (sessions, game records, checkout parameters) may hold legacy
/// alias values, so they must pass through [`PlanTier::normalize`] before
/// any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlanTier {
    /// Free-to-play catalog only.
    Free,
    /// Retro vault plus everything in Free.
    Retro,
    /// Indie catalog plus every retro and free game.
    Indie,
    /// Day-one AAA drops with the entire library beneath it.
    #[serde(rename = "AAA")]
    Aaa,
}

impl PlanTier {
    /// All tiers in ascending order.
    pub const ALL: [PlanTier; 4] = [PlanTier::Free, PlanTier::Retro, PlanTier::Indie, PlanTier::Aaa];

    /// Normalizes a raw tier string to its canonical tier.
    ///
    /// Trims surrounding whitespace and lowercases with a locale-independent
    /// fold before alias lookup. Unrecognized or absent input yields `None`;
    /// that is a normal outcome, not an error, and callers decide the
    /// fallback (default to Free, or treat as ungated).
    pub fn normalize(raw: Option<&str>) -> Option<PlanTier> {
        match raw?.trim().to_lowercase().as_str() {
            "free" | "starter" => Some(PlanTier::Free),
            "retro" | "retro pack" => Some(PlanTier::Retro),
            "indie" | "indie pack" | "pro" => Some(PlanTier::Indie),
            "aaa" | "aaa pack" | "ultimate" => Some(PlanTier::Aaa),
            _ => None,
        }
    }

    /// Returns the 1-based position of this tier in ascending order.
    pub fn weight(&self) -> u8 {
        match self {
            PlanTier::Free => 1,
            PlanTier::Retro => 2,
            PlanTier::Indie => 3,
            PlanTier::Aaa => 4,
        }
    }

    /// Returns the comparison weight of a raw tier string.
    ///
    /// Normalizes first; unrecognized or absent input weighs 0. This is the
    /// single source of truth for tier comparison.
    pub fn weight_of(raw: Option<&str>) -> u8 {
        Self::normalize(raw).map_or(0, |tier| tier.weight())
    }

    /// Decides whether a plan grants access to content gated at `required`.
    ///
    /// Both sides pass through [`PlanTier::weight_of`]. A game whose required
    /// tier fails to normalize carries no gate and is always accessible; a
    /// user with no recognized plan can only access ungated content.
    pub fn can_access(required: Option<&str>, current: Option<&str>) -> bool {
        Self::weight_of(current) >= Self::weight_of(required)
    }

    /// Returns the canonical label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Retro => "Retro",
            PlanTier::Indie => "Indie",
            PlanTier::Aaa => "AAA",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
