//! Checkout selection resolution.
//!
//! Pure fallback rules for turning raw request and session strings into a
//! concrete tier selection. Each step tolerates legacy alias values because
//! older sessions may hold pre-normalization strings.

use super::PlanTier;

/// Resolved state of the checkout page for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutResolution {
    /// The user's current tier (normalized session value, defaulting to Free).
    pub current: PlanTier,
    /// The tier the checkout is preloaded with.
    pub selected: PlanTier,
    /// Whether confirming the selection would move the user up the order.
    pub is_upgrade: bool,
}

/// Resolves the tier a plan-selection link points at.
///
/// Fallback chain: the chosen tier, then the session's current plan,
/// then Free.
pub fn resolve_selection(chosen: Option<&str>, session_plan: Option<&str>) -> PlanTier {
    PlanTier::normalize(chosen)
        .or_else(|| PlanTier::normalize(session_plan))
        .unwrap_or(PlanTier::Free)
}

/// Resolves the checkout page state.
///
/// The current tier is the normalized session plan, defaulting to Free. The
/// selection falls back from the query parameter to the session's pending
/// plan to the current tier.
pub fn resolve_checkout(
    tier_param: Option<&str>,
    pending_plan: Option<&str>,
    session_plan: Option<&str>,
) -> CheckoutResolution {
    let current = PlanTier::normalize(session_plan).unwrap_or(PlanTier::Free);
    let selected = PlanTier::normalize(tier_param)
        .or_else(|| PlanTier::normalize(pending_plan))
        .unwrap_or(current);

    CheckoutResolution {
        current,
        selected,
        is_upgrade: selected.weight() > current.weight(),
    }
}

/// Resolves the tier a confirmation commits to.
///
/// Fallback chain: the submitted tier, then the pending selection, then Free.
pub fn resolve_confirmation(tier_param: Option<&str>, pending_plan: Option<&str>) -> PlanTier {
    PlanTier::normalize(tier_param)
        .or_else(|| PlanTier::normalize(pending_plan))
        .unwrap_or(PlanTier::Free)
}
