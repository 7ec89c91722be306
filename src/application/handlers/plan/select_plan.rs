//! SelectPlanHandler - Command handler for starting a plan change.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::plan::{self, PlanTier};
use crate::domain::session::SessionData;
use crate::ports::SessionStore;

/// Command to select a tier and stage it for checkout.
#[derive(Debug, Clone)]
pub struct SelectPlanCommand {
    /// Raw tier string from the request, canonical or legacy alias.
    pub tier: Option<String>,
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone)]
pub struct SelectPlanResult {
    /// The session holding the pending selection, created on demand.
    pub session_id: SessionId,
    pub selected: PlanTier,
}

/// Stages a plan selection in the session ahead of checkout.
///
/// Selection works for anonymous visitors too; a session is created on
/// demand so the pending choice survives until sign-in.
pub struct SelectPlanHandler {
    sessions: Arc<dyn SessionStore>,
}

impl SelectPlanHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: SelectPlanCommand) -> Result<SelectPlanResult, DomainError> {
        let (session_id, mut session) = load_or_create(self.sessions.as_ref(), cmd.session_id).await?;

        let selected = plan::resolve_selection(cmd.tier.as_deref(), session.plan_tier_raw());
        session.set_pending(selected);
        self.sessions.save(session_id, session).await?;

        tracing::debug!(%session_id, selected = %selected, "plan selection staged");
        Ok(SelectPlanResult {
            session_id,
            selected,
        })
    }
}

/// Loads the session for an id, creating a fresh anonymous session when the
/// id is absent or no longer known.
pub(super) async fn load_or_create(
    sessions: &dyn SessionStore,
    session_id: Option<SessionId>,
) -> Result<(SessionId, SessionData), DomainError> {
    if let Some(id) = session_id {
        if let Some(data) = sessions.load(id).await? {
            return Ok((id, data));
        }
    }
    let data = SessionData::default();
    let id = sessions.create(data.clone()).await?;
    Ok((id, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;

    fn handler() -> (SelectPlanHandler, Arc<InMemorySessionStore>) {
        let sessions = Arc::new(InMemorySessionStore::new());
        (SelectPlanHandler::new(sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn creates_a_session_for_anonymous_selection() {
        let (handler, sessions) = handler();

        let result = handler
            .handle(SelectPlanCommand {
                tier: Some("retro".to_string()),
                session_id: None,
            })
            .await
            .unwrap();
        assert_eq!(result.selected, PlanTier::Retro);

        let stored = sessions.load(result.session_id).await.unwrap().unwrap();
        assert_eq!(stored.pending_plan.as_deref(), Some("Retro"));
    }

    #[tokio::test]
    async fn legacy_alias_resolves_to_canonical_tier() {
        let (handler, _) = handler();
        let result = handler
            .handle(SelectPlanCommand {
                tier: Some("pro".to_string()),
                session_id: None,
            })
            .await
            .unwrap();
        assert_eq!(result.selected, PlanTier::Indie);
    }

    #[tokio::test]
    async fn unrecognized_tier_falls_back_to_current_plan() {
        let (handler, sessions) = handler();
        let mut data = SessionData::default();
        data.plan_tier = Some("aaa pack".to_string());
        let session_id = sessions.create(data).await.unwrap();

        let result = handler
            .handle(SelectPlanCommand {
                tier: Some("mystery".to_string()),
                session_id: Some(session_id),
            })
            .await
            .unwrap();
        assert_eq!(result.session_id, session_id);
        assert_eq!(result.selected, PlanTier::Aaa);
    }

    #[tokio::test]
    async fn no_tier_and_no_plan_defaults_to_free() {
        let (handler, _) = handler();
        let result = handler
            .handle(SelectPlanCommand {
                tier: None,
                session_id: None,
            })
            .await
            .unwrap();
        assert_eq!(result.selected, PlanTier::Free);
    }

    #[tokio::test]
    async fn stale_session_id_gets_a_new_session() {
        let (handler, _) = handler();
        let stale = SessionId::new();

        let result = handler
            .handle(SelectPlanCommand {
                tier: Some("aaa".to_string()),
                session_id: Some(stale),
            })
            .await
            .unwrap();
        assert_ne!(result.session_id, stale);
    }
}
