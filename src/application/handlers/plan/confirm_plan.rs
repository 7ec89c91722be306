//! ConfirmPlanHandler - Command handler that commits a plan change.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::plan::{self, PlanDescriptor, PlanTier};
use crate::ports::SessionStore;

use super::select_plan::load_or_create;

/// Command to confirm the checkout and commit the plan.
#[derive(Debug, Clone)]
pub struct ConfirmPlanCommand {
    /// Raw tier string from the request, canonical or legacy alias.
    pub tier: Option<String>,
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone)]
pub struct ConfirmPlanResult {
    pub session_id: SessionId,
    pub confirmed: PlanTier,
    pub descriptor: PlanDescriptor,
}

/// Commits the resolved tier as the session's current plan.
///
/// No payment step is modeled; confirmation writes the canonical label
/// straight into the session.
pub struct ConfirmPlanHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ConfirmPlanHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: ConfirmPlanCommand) -> Result<ConfirmPlanResult, DomainError> {
        let (session_id, mut session) = load_or_create(self.sessions.as_ref(), cmd.session_id).await?;

        let confirmed = plan::resolve_confirmation(cmd.tier.as_deref(), session.pending_plan_raw());
        session.set_plan(confirmed);
        session.set_pending(confirmed);
        self.sessions.save(session_id, session).await?;

        let tiers = plan::descriptors();
        let descriptor = plan::descriptor_for(&tiers, confirmed.label());

        tracing::info!(%session_id, confirmed = %confirmed, "plan confirmed");
        Ok(ConfirmPlanResult {
            session_id,
            confirmed,
            descriptor,
        })
    }
}
