//! ViewCheckoutHandler - Query handler for the plan checkout page.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::plan::{self, CheckoutResolution, PlanDescriptor};
use crate::ports::SessionStore;

use super::select_plan::load_or_create;

/// Query for the checkout page, optionally forcing a tier.
#[derive(Debug, Clone)]
pub struct ViewCheckoutQuery {
    /// Raw tier string from the request, canonical or legacy alias.
    pub tier: Option<String>,
    pub session_id: Option<SessionId>,
}

/// Everything the checkout page renders.
#[derive(Debug, Clone)]
pub struct CheckoutView {
    pub session_id: SessionId,
    /// All four descriptors, ascending tier order.
    pub tiers: Vec<PlanDescriptor>,
    pub selected: PlanDescriptor,
    pub current: PlanDescriptor,
    pub resolution: CheckoutResolution,
}

/// Resolves the checkout selection and persists it as the pending plan, so
/// a reload or a sign-in redirect lands back on the same choice.
pub struct ViewCheckoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ViewCheckoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: ViewCheckoutQuery) -> Result<CheckoutView, DomainError> {
        let (session_id, mut session) =
            load_or_create(self.sessions.as_ref(), query.session_id).await?;

        let resolution = plan::resolve_checkout(
            query.tier.as_deref(),
            session.pending_plan_raw(),
            session.plan_tier_raw(),
        );
        session.set_pending(resolution.selected);
        self.sessions.save(session_id, session).await?;

        let tiers = plan::descriptors();
        let selected = plan::descriptor_for(&tiers, resolution.selected.label());
        let current = plan::descriptor_for(&tiers, resolution.current.label());

        Ok(CheckoutView {
            session_id,
            tiers,
            selected,
            current,
            resolution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::plan::PlanTier;
    use crate::domain::session::SessionData;

    fn handler() -> (ViewCheckoutHandler, Arc<InMemorySessionStore>) {
        let sessions = Arc::new(InMemorySessionStore::new());
        (ViewCheckoutHandler::new(sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn anonymous_checkout_defaults_to_free() {
        let (handler, _) = handler();
        let view = handler
            .handle(ViewCheckoutQuery {
                tier: None,
                session_id: None,
            })
            .await
            .unwrap();
        assert_eq!(view.tiers.len(), 4);
        assert_eq!(view.selected.key, "Free");
        assert_eq!(view.current.key, "Free");
        assert!(!view.resolution.is_upgrade);
    }

    #[tokio::test]
    async fn legacy_pro_selection_loads_the_indie_descriptor() {
        let (handler, sessions) = handler();
        let mut data = SessionData::default();
        data.plan_tier = Some("Free".to_string());
        let session_id = sessions.create(data).await.unwrap();

        let view = handler
            .handle(ViewCheckoutQuery {
                tier: Some("pro".to_string()),
                session_id: Some(session_id),
            })
            .await
            .unwrap();
        assert_eq!(view.selected.key, "Indie");
        assert_eq!(view.selected.label, "Indie Pack");
        assert_eq!(view.selected.price, "$12.99");
        assert!(view.resolution.is_upgrade);
    }

    #[tokio::test]
    async fn selection_persists_as_pending_plan() {
        let (handler, sessions) = handler();
        let view = handler
            .handle(ViewCheckoutQuery {
                tier: Some("aaa".to_string()),
                session_id: None,
            })
            .await
            .unwrap();

        let stored = sessions.load(view.session_id).await.unwrap().unwrap();
        assert_eq!(stored.pending_plan.as_deref(), Some("AAA"));
    }

    #[tokio::test]
    async fn reload_without_a_tier_keeps_the_pending_selection() {
        let (handler, _) = handler();
        let first = handler
            .handle(ViewCheckoutQuery {
                tier: Some("retro pack".to_string()),
                session_id: None,
            })
            .await
            .unwrap();

        let reload = handler
            .handle(ViewCheckoutQuery {
                tier: None,
                session_id: Some(first.session_id),
            })
            .await
            .unwrap();
        assert_eq!(reload.resolution.selected, PlanTier::Retro);
    }

    #[tokio::test]
    async fn downgrade_is_not_flagged_as_upgrade() {
        let (handler, sessions) = handler();
        let mut data = SessionData::default();
        data.plan_tier = Some("ultimate".to_string());
        let session_id = sessions.create(data).await.unwrap();

        let view = handler
            .handle(ViewCheckoutQuery {
                tier: Some("free".to_string()),
                session_id: Some(session_id),
            })
            .await
            .unwrap();
        assert_eq!(view.current.key, "AAA");
        assert!(!view.resolution.is_upgrade);
    }
}
