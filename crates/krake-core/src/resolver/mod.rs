//! Action resolver
//!
//! Turns a recognized invocation or a fallback intent into a
//! `CommandResult`. Resolution never fails: an invocation the catalog does
//! not know yields `None` and the caller falls back to intent matching.

pub mod catalog;
pub mod template;

use crate::model::{ActionRecord, CommandResult, Integration, Intent};
use crate::tokenizer::ParsedInvocation;

use catalog::HANDLER_PLACEHOLDER;

/// Title given to tasks created from a free-text command
pub const COMMAND_TASK_TITLE: &str = "New task from command";

pub const ACTION_CREATE_TASK: &str = "create_task";
pub const ACTION_OPEN_INTEGRATION: &str = "open_integration";
pub const ACTION_OPEN_AGENTS: &str = "open_agents";

/// Every action type the resolver can produce, catalog types first
pub fn action_types() -> Vec<&'static str> {
    catalog::NAMESPACES
        .iter()
        .map(|ns| ns.action_type)
        .chain([ACTION_CREATE_TASK, ACTION_OPEN_INTEGRATION, ACTION_OPEN_AGENTS])
        .collect()
}

/// Resolve a namespaced invocation against the catalog
///
/// Returns `None` when the invocation has no namespace, or when the
/// namespace or operation is not in the catalog.
pub fn resolve_invocation(invocation: &ParsedInvocation) -> Option<CommandResult> {
    let (namespace, operation) = invocation.target()?;
    let (ns, op) = catalog::lookup(namespace, operation)?;
    let args = &invocation.arguments;

    let handler = op.handler.map(|route| route.route(args));
    let response = template::render(op.response, |name| {
        if name == HANDLER_PLACEHOLDER {
            handler.map(str::to_string)
        } else {
            // keys arrive lower-cased, so `{layoutPrompt}` must still bind
            // `layoutprompt`; an exact-case lookup would always render the default
            args.get_ignore_ascii_case(name).map(str::to_string)
        }
    });

    let mut action = ActionRecord::new(ns.action_type).with_action(op.name);
    if op.binds_args {
        action = action.with_args(args.clone());
    }
    if let Some(handler) = handler {
        action = action.with_handler(handler);
    }

    Some(CommandResult::with_action(response, action))
}

/// Resolve a fallback intent to its fixed reply
pub fn resolve_intent(intent: Intent) -> CommandResult {
    match intent {
        Intent::Greeting => CommandResult::reply("Hello! How can I assist you today?"),
        Intent::CreateTask => CommandResult::with_action(
            "I've created a new task for you.",
            ActionRecord::new(ACTION_CREATE_TASK).with_title(COMMAND_TASK_TITLE),
        ),
        Intent::OpenIntegration(integration) => CommandResult::with_action(
            integration_response(integration),
            ActionRecord::new(ACTION_OPEN_INTEGRATION).with_integration(integration.as_str()),
        ),
        Intent::OpenAgents => CommandResult::with_action(
            "I'm connecting you with the Sintra AI agents.",
            ActionRecord::new(ACTION_OPEN_AGENTS),
        ),
        Intent::Unrecognized => CommandResult::unrecognized(),
    }
}

fn integration_response(integration: Integration) -> &'static str {
    match integration {
        Integration::Shopify => "I'm checking Shopify for you.",
        Integration::Gelato => "I'm checking Gelato for you.",
        Integration::Binance => "I'm checking Binance for you.",
        Integration::AffiliateBot => "Opening Affiliate Bot Manager.",
        Integration::TradingBot => "Opening ProfitPilot Trading Bot.",
        Integration::Email => "Opening Email Builder & Manager.",
    }
}
