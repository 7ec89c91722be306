//! Display metadata for the selectable plan tiers.

use serde::{Deserialize, Serialize};

use super::PlanTier;

/// Checkout display metadata for one plan tier.
///
/// The `includes` list spells out each descriptor's own inclusion chain
/// explicitly; nothing about cumulative access is implied by ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// Canonical tier label, used for lookups.
    pub key: String,
    /// Marketing display label.
    pub label: String,
    /// Price string, as rendered at checkout.
    pub price: String,
    /// Prose description of the plan.
    pub description: String,
    /// Ordered list of perk strings.
    pub perks: Vec<String>,
    /// Ordered list of catalog slices this plan includes.
    pub includes: Vec<String>,
}

impl PlanDescriptor {
    fn new(
        tier: PlanTier,
        label: &str,
        price: &str,
        description: &str,
        perks: &[&str],
        includes: &[&str],
    ) -> Self {
        Self {
            key: tier.label().to_string(),
            label: label.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            perks: perks.iter().map(|p| p.to_string()).collect(),
            includes: includes.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Returns the four plan descriptors in ascending tier order.
///
/// Each call builds fresh values, so callers may mutate their copy freely.
pub fn descriptors() -> Vec<PlanDescriptor> {
    vec![
        PlanDescriptor::new(
            PlanTier::Free,
            "Free",
            "$0",
            "Access the free-to-play catalog with cloud saves and two linked devices.",
            &["1080p streaming", "Free-to-play catalog", "Cloud saves", "2 devices"],
            &["Free catalog"],
        ),
        PlanDescriptor::new(
            PlanTier::Retro,
            "Retro Pack",
            "$5.99",
            "Unlock the full retro vault. Includes everything in Free.",
            &["Upscaled classics", "Retro achievements", "CRT-style shaders", "Early event access"],
            &["Retro catalog", "Free catalog"],
        ),
        PlanDescriptor::new(
            PlanTier::Indie,
            "Indie Pack",
            "$12.99",
            "Indie darlings plus every retro and free game. Perfect middle lane.",
            &["4K streaming on indies", "Cross-save sync", "5 devices", "Queue priority"],
            &["Indie catalog", "Retro Pack", "Free catalog"],
        ),
        PlanDescriptor::new(
            PlanTier::Aaa,
            "AAA Pack",
            "$17.99",
            "Day-one AAA drops with the entire library beneath it.",
            &["120fps where available", "Unlimited devices", "Latency priority", "Premium support"],
            &["AAA catalog", "Indie Pack", "Retro Pack", "Free catalog"],
        ),
    ]
}

/// Finds the descriptor for a canonical tier label.
///
/// Falls back to the first descriptor (Free) when the key is unrecognized.
pub fn descriptor_for(tiers: &[PlanDescriptor], key: &str) -> PlanDescriptor {
    tiers
        .iter()
        .find(|t| t.key == key)
        .unwrap_or(&tiers[0])
        .clone()
}
