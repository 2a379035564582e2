//! Collaborator routing
//!
//! The interpreter only describes work. After dispatch, each produced
//! `ActionRecord` is handed to the collaborator registered for its action
//! type. Routing reports per action and never changes the `CommandResult`.

use std::collections::BTreeMap;

use krake_core::errors::{ExError, KrakeError};
use krake_core::{ActionRecord, CommandResult};
use krake_core_types::RequestContext;
use serde::{Deserialize, Serialize};

/// Subsystem that carries out actions of one or more action types
pub trait Collaborator: Send + Sync {
    /// Handle one action, returning a short acknowledgement
    ///
    /// # Errors
    ///
    /// Returns an `ExError` when the collaborator rejects or fails the
    /// action. Routing reports every such failure as
    /// `ExErrorKind::ExternalService`, keeping the collaborator's message.
    fn handle(&self, ctx: &RequestContext, action: &ActionRecord) -> Result<String, ExError>;
}

/// Acknowledges every action without doing any work
pub struct NoopCollaborator;

impl Collaborator for NoopCollaborator {
    fn handle(&self, _ctx: &RequestContext, action: &ActionRecord) -> Result<String, ExError> {
        Ok(match &action.action {
            Some(name) => format!("accepted {} {}", action.kind, name),
            None => format!("accepted {}", action.kind),
        })
    }
}

#[derive(Default)]
pub struct CollaboratorRegistry {
    collaborators: BTreeMap<String, Box<dyn Collaborator>>,
}

impl CollaboratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `collaborator` for `action_type`, returning any collaborator
    /// it replaces
    pub fn register(
        &mut self,
        action_type: impl Into<String>,
        collaborator: Box<dyn Collaborator>,
    ) -> Option<Box<dyn Collaborator>> {
        self.collaborators.insert(action_type.into(), collaborator)
    }

    /// Registry with a `NoopCollaborator` for each given action type
    pub fn noop_for<'a>(action_types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::new();
        for action_type in action_types {
            registry.register(action_type, Box::new(NoopCollaborator));
        }
        registry
    }

    pub fn get(&self, action_type: &str) -> Option<&dyn Collaborator> {
        self.collaborators.get(action_type).map(|c| c.as_ref())
    }

    /// Registered action types, sorted
    pub fn action_types(&self) -> Vec<&str> {
        self.collaborators.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.collaborators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collaborators.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Delivered,
    Unrouted,
    Failed,
}

/// What happened to one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub status: OutcomeStatus,
    /// Acknowledgement on delivery, error text otherwise
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ActionOutcome {
    fn delivered(action: &ActionRecord, detail: String) -> Self {
        Self {
            action_type: action.kind.clone(),
            action: action.action.clone(),
            status: OutcomeStatus::Delivered,
            detail,
            error_code: None,
        }
    }

    fn errored(action: &ActionRecord, status: OutcomeStatus, err: &ExError) -> Self {
        Self {
            action_type: action.kind.clone(),
            action: action.action.clone(),
            status,
            detail: err.to_string(),
            error_code: Some(err.code().to_string()),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OutcomeStatus::Delivered
    }
}

/// Hand every action of `result` to its collaborator, in order
pub fn route_actions(
    registry: &CollaboratorRegistry,
    ctx: &RequestContext,
    result: &CommandResult,
) -> Vec<ActionOutcome> {
    result
        .actions
        .iter()
        .map(|action| match registry.get(&action.kind) {
            None => {
                let err: ExError = KrakeError::NoCollaborator {
                    action_type: action.kind.clone(),
                }
                .into();
                ActionOutcome::errored(
                    action,
                    OutcomeStatus::Unrouted,
                    &err.with_request_id(ctx.request_id.clone()),
                )
            }
            Some(collaborator) => match collaborator.handle(ctx, action) {
                Ok(detail) => ActionOutcome::delivered(action, detail),
                Err(err) => {
                    let err: ExError = KrakeError::CollaboratorFailed {
                        action_type: action.kind.clone(),
                        message: err.message().to_string(),
                    }
                    .into();
                    ActionOutcome::errored(
                        action,
                        OutcomeStatus::Failed,
                        &err.with_request_id(ctx.request_id.clone())
                            .with_workspace_id(ctx.workspace_id),
                    )
                }
            },
        })
        .inspect(|outcome| {
            tracing::debug!(
                action_type = %outcome.action_type,
                status = ?outcome.status,
                "routed action"
            );
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use krake_core::dispatch;
    use krake_core_types::WorkspaceId;

    #[test]
    fn test_noop_acknowledges() {
        let ctx = RequestContext::new(WorkspaceId::unscoped());
        let action = ActionRecord::new("system_action").with_action("verify");
        assert_eq!(
            NoopCollaborator.handle(&ctx, &action).unwrap(),
            "accepted system_action verify"
        );
    }

    #[test]
    fn test_unregistered_type_is_unrouted() {
        let registry = CollaboratorRegistry::new();
        let ctx = RequestContext::new(WorkspaceId::unscoped());
        let outcomes = route_actions(&registry, &ctx, &dispatch("system.verify"));

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, OutcomeStatus::Unrouted);
        assert_eq!(
            outcomes[0].error_code.as_deref(),
            Some("ERR_COLLABORATOR_UNAVAILABLE")
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CollaboratorRegistry::noop_for(["email_action"]);
        assert!(registry
            .register("email_action", Box::new(NoopCollaborator))
            .is_some());
        assert_eq!(registry.action_types(), vec!["email_action"]);
    }
}
