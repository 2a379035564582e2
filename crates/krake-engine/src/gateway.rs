//! Command gateway with boundary logging.
//!
//! Operations:
//! - `submit`: validate, dispatch, record in the journal
//! - `route`: hand a result's actions to collaborators
//!
//! ## Logging Ownership
//!
//! The gateway owns lifecycle logging for these operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The interpreter below uses only `tracing::debug!()` for the route taken.

use std::time::Instant;

use krake_core::errors::{KrakeError, Result};
use krake_core::{dispatch, log_op_end, log_op_error, log_op_start, CommandResult};
use krake_core_types::{RequestContext, WorkspaceId};

use crate::collaborator::{route_actions, ActionOutcome, CollaboratorRegistry};
use crate::config::GatewayConfig;
use crate::history::{CommandHistory, CommandHistoryItem};
use crate::request::{CommandRequest, GatewayReply};

pub struct Gateway {
    config: GatewayConfig,
    history: CommandHistory,
    collaborators: CollaboratorRegistry,
}

impl Gateway {
    /// Gateway with an empty collaborator registry
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            history: CommandHistory::new(config.history_capacity),
            config,
            collaborators: CollaboratorRegistry::new(),
        }
    }

    pub fn with_collaborators(mut self, collaborators: CollaboratorRegistry) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn collaborators(&self) -> &CollaboratorRegistry {
        &self.collaborators
    }

    /// Check a request against the gateway limits
    ///
    /// # Errors
    ///
    /// - `EmptyCommand`: command is empty or whitespace
    /// - `CommandTooLong`: command exceeds `max_command_len` bytes
    pub fn validate(&self, request: &CommandRequest) -> Result<()> {
        if request.command.trim().is_empty() {
            return Err(KrakeError::EmptyCommand);
        }
        let len = request.command.len();
        if len > self.config.max_command_len {
            return Err(KrakeError::CommandTooLong {
                len,
                max: self.config.max_command_len,
            });
        }
        Ok(())
    }

    /// Validate, dispatch and record one request
    ///
    /// Rejected requests are not recorded.
    ///
    /// # Errors
    ///
    /// See [`Gateway::validate`].
    pub fn submit(&mut self, request: CommandRequest) -> Result<GatewayReply> {
        let ctx = RequestContext::new(request.workspace_id);
        self.submit_with_context(&ctx, request)
    }

    /// `submit` under a caller-supplied context
    ///
    /// # Errors
    ///
    /// See [`Gateway::validate`].
    pub fn submit_with_context(
        &mut self,
        ctx: &RequestContext,
        request: CommandRequest,
    ) -> Result<GatewayReply> {
        log_op_start!(
            "gateway_submit",
            request_id = ctx.request_id.as_str(),
            trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()),
            span_id = ctx.span_id.as_ref().map(|s| s.as_str()),
            workspace_id = %request.workspace_id
        );
        let start = Instant::now();

        let result = self.submit_impl(ctx, request).map_err(|e| {
            log_op_error!(
                "gateway_submit",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = ctx.request_id.as_str()
            );
            e
        })?;

        log_op_end!(
            "gateway_submit",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str(),
            action_count = result.result.actions.len()
        );

        Ok(result)
    }

    fn submit_impl(
        &mut self,
        ctx: &RequestContext,
        request: CommandRequest,
    ) -> Result<GatewayReply> {
        self.validate(&request)?;

        let result = dispatch(&request.command);
        let item = self
            .history
            .record(request.workspace_id, request.command, result.response.clone());

        Ok(GatewayReply {
            request_id: ctx.request_id.clone(),
            workspace_id: request.workspace_id,
            history_id: item.id,
            result,
        })
    }

    /// Hand the actions of `result` to registered collaborators
    pub fn route(&self, ctx: &RequestContext, result: &CommandResult) -> Vec<ActionOutcome> {
        log_op_start!(
            "gateway_route",
            request_id = ctx.request_id.as_str(),
            action_count = result.actions.len()
        );
        let start = Instant::now();

        let outcomes = route_actions(&self.collaborators, ctx, result);

        let delivered = outcomes.iter().filter(|o| o.is_delivered()).count();
        log_op_end!(
            "gateway_route",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str(),
            delivered = delivered
        );

        outcomes
    }

    /// Journal entries, newest first, optionally for one workspace
    pub fn recent(&self, workspace_id: Option<&WorkspaceId>) -> Vec<&CommandHistoryItem> {
        match workspace_id {
            Some(ws) => self.history.list_for_workspace(ws),
            None => self.history.list(),
        }
    }
}
