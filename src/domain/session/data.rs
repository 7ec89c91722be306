//! Typed view of one user's session attributes.

use serde::{Deserialize, Serialize};

use crate::domain::plan::PlanTier;
use crate::domain::user::Username;

/// Per-user session attributes.
///
/// The tier fields hold raw strings because sessions created before a
/// vocabulary change may still carry legacy alias values ("pro",
/// "ultimate"). Reads normalize; writes made by the plan flow store
/// canonical labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Signed-in username, if any.
    pub username: Option<Username>,
    /// Current plan tier string (canonical or legacy alias).
    pub plan_tier: Option<String>,
    /// Tier selected mid-checkout, same format.
    pub pending_plan: Option<String>,
}

impl SessionData {
    /// Creates a signed-in session with no plan state.
    pub fn for_user(username: Username) -> Self {
        Self {
            username: Some(username),
            plan_tier: None,
            pending_plan: None,
        }
    }

    /// Returns true when a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    /// Returns the raw current tier string for policy calls.
    pub fn plan_tier_raw(&self) -> Option<&str> {
        self.plan_tier.as_deref()
    }

    /// Returns the raw pending selection for policy calls.
    pub fn pending_plan_raw(&self) -> Option<&str> {
        self.pending_plan.as_deref()
    }

    /// Returns the normalized current tier, defaulting to Free for display.
    pub fn display_tier(&self) -> PlanTier {
        PlanTier::normalize(self.plan_tier_raw()).unwrap_or(PlanTier::Free)
    }

    /// Stores a canonical tier as the current plan.
    pub fn set_plan(&mut self, tier: PlanTier) {
        self.plan_tier = Some(tier.label().to_string());
    }

    /// Stores a canonical tier as the pending checkout selection.
    pub fn set_pending(&mut self, tier: PlanTier) {
        self.pending_plan = Some(tier.label().to_string());
    }
}
