//! Gateway request and reply envelopes

use krake_core::errors::{KrakeError, Result};
use krake_core::CommandResult;
use krake_core_types::{RequestId, WorkspaceId};
use serde::{Deserialize, Serialize};

/// A command submitted on behalf of a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub workspace_id: WorkspaceId,
    pub command: String,
}

impl CommandRequest {
    pub fn new(workspace_id: WorkspaceId, command: impl Into<String>) -> Self {
        Self {
            workspace_id,
            command: command.into(),
        }
    }

    /// Build a request from an untyped workspace id
    ///
    /// # Errors
    ///
    /// Returns `KrakeError::InvalidWorkspaceId` if `workspace_id` is not a UUID.
    pub fn parse(workspace_id: &str, command: impl Into<String>) -> Result<Self> {
        let workspace_id =
            WorkspaceId::parse(workspace_id).map_err(|_| KrakeError::InvalidWorkspaceId {
                value: workspace_id.to_string(),
            })?;
        Ok(Self::new(workspace_id, command))
    }
}

/// The gateway's answer to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayReply {
    pub request_id: RequestId,
    pub workspace_id: WorkspaceId,
    /// Journal entry recorded for this request
    pub history_id: String,
    pub result: CommandResult,
}
