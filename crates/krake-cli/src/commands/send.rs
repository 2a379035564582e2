//! Send command
//!
//! Usage: krake send <COMMAND> [--workspace <UUID>] [--trace-id <ID>] [--pretty] [--route]

use clap::Args;
use krake_core::CommandResult;
use krake_core_types::{RequestContext, TraceId};
use krake_engine::{ActionOutcome, CommandRequest, GatewayConfig};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Command text, e.g. "trading.activateStrategy(id:abc123)"
    pub command: String,

    /// Workspace the command is issued from
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Trace id to attach to the request's log events
    #[arg(long)]
    pub trace_id: Option<String>,

    /// Also hand the produced actions to collaborators and print the outcomes
    #[arg(long)]
    pub route: bool,
}

#[derive(Serialize)]
struct RoutedOutput<'a> {
    result: &'a CommandResult,
    outcomes: Vec<ActionOutcome>,
}

/// Execute send command
pub fn execute(args: SendArgs, config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_id = super::workspace(args.workspace.as_deref())?;
    let mut gateway = super::gateway(config);

    let mut ctx = RequestContext::new(workspace_id);
    if let Some(trace_id) = args.trace_id {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }

    let reply = gateway.submit_with_context(&ctx, CommandRequest::new(workspace_id, args.command))?;

    let output = if args.route {
        let routed = RoutedOutput {
            result: &reply.result,
            outcomes: gateway.route(&ctx, &reply.result),
        };
        super::to_json(&routed, args.pretty)?
    } else {
        super::to_json(&reply.result, args.pretty)?
    };

    println!("{}", output);
    Ok(())
}
