//! JSON request/response types for the plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::plan::PlanDescriptor;

/// Query parameters for the checkout page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutParams {
    /// Raw tier string, canonical or legacy alias.
    pub tier: Option<String>,
}

/// Request to confirm the checkout. The tier may be omitted to confirm
/// whatever selection is pending in the session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmPlanRequest {
    #[serde(default)]
    pub tier: Option<String>,
}

/// Checkout display metadata for one tier.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDescriptorResponse {
    pub key: String,
    pub label: String,
    pub price: String,
    pub description: String,
    pub perks: Vec<String>,
    pub includes: Vec<String>,
}

impl From<PlanDescriptor> for PlanDescriptorResponse {
    fn from(descriptor: PlanDescriptor) -> Self {
        Self {
            key: descriptor.key,
            label: descriptor.label,
            price: descriptor.price,
            description: descriptor.description,
            perks: descriptor.perks,
            includes: descriptor.includes,
        }
    }
}

/// The plans page: every tier plus the viewer's current one.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListResponse {
    pub tiers: Vec<PlanDescriptorResponse>,
    /// Canonical label of the viewer's current tier.
    pub current: String,
}

/// Result of staging a plan selection.
#[derive(Debug, Clone, Serialize)]
pub struct SelectPlanResponse {
    pub session_id: String,
    pub selected: String,
}

/// The checkout page state.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub tiers: Vec<PlanDescriptorResponse>,
    pub selected: PlanDescriptorResponse,
    pub current: PlanDescriptorResponse,
    pub is_upgrade: bool,
}

/// Result of confirming a plan change.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmPlanResponse {
    pub session_id: String,
    pub plan: PlanDescriptorResponse,
}
