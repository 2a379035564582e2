//! Command dispatcher
//!
//! Composition root of the interpreter: normalize, tokenize, resolve the
//! invocation, and only when that yields nothing, classify the text with
//! the domain matcher. Pure and total; every input produces a result.

use std::fmt;

use krake_core_types::schema::{ROUTE_INTENT, ROUTE_NAMESPACED};

use crate::matcher;
use crate::model::{CommandResult, Intent};
use crate::resolver;
use crate::tokenizer;

/// Which branch produced a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Namespaced { namespace: String, operation: String },
    Intent(Intent),
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Namespaced { .. } => ROUTE_NAMESPACED,
            Route::Intent(_) => ROUTE_INTENT,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Namespaced {
                namespace,
                operation,
            } => write!(f, "{}.{}", namespace, operation),
            Route::Intent(intent) => write!(f, "{}", intent),
        }
    }
}

/// A dispatch result together with the route that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub route: Route,
    pub result: CommandResult,
}

/// Interpret a raw command, reporting the route taken
pub fn interpret(raw: &str) -> Interpretation {
    let normalized = raw.to_lowercase();

    if let Some(invocation) = tokenizer::parse(&normalized) {
        if let Some(result) = resolver::resolve_invocation(&invocation) {
            if let Some((namespace, operation)) = invocation.target() {
                tracing::debug!(
                    route = ROUTE_NAMESPACED,
                    namespace,
                    operation,
                    action_count = result.actions.len(),
                    "resolved namespaced command"
                );
                return Interpretation {
                    route: Route::Namespaced {
                        namespace: namespace.to_string(),
                        operation: operation.to_string(),
                    },
                    result,
                };
            }
        }
    }

    let intent = matcher::match_intent(&normalized);
    tracing::debug!(route = ROUTE_INTENT, intent = %intent, "matched fallback intent");

    Interpretation {
        route: Route::Intent(intent),
        result: resolver::resolve_intent(intent),
    }
}

/// Dispatch a raw command to its `CommandResult`
///
/// # Example
///
/// ```
/// use krake_core::dispatch;
///
/// let result = dispatch("trading.activateStrategy(id:abc123)");
/// assert_eq!(result.response, "Activating trading strategy.");
/// assert_eq!(result.actions[0].action.as_deref(), Some("activateStrategy"));
///
/// let fallback = dispatch("xyzzy plugh");
/// assert!(fallback.actions.is_empty());
/// ```
pub fn dispatch(raw: &str) -> CommandResult {
    interpret(raw).result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Integration;

    #[test]
    fn test_namespaced_route() {
        let interpretation = interpret("Trading.ActivateStrategy(id:ABC)");
        assert_eq!(
            interpretation.route,
            Route::Namespaced {
                namespace: "trading".to_string(),
                operation: "activatestrategy".to_string(),
            }
        );
        assert_eq!(interpretation.route.as_str(), ROUTE_NAMESPACED);
        // values are post-normalization
        let args = interpretation.result.actions[0].args.as_ref().unwrap();
        assert_eq!(args.get("id"), Some("abc"));
    }

    #[test]
    fn test_unknown_operation_falls_back_to_matcher() {
        let interpretation = interpret("trading.liquidate");
        assert_eq!(
            interpretation.route,
            Route::Intent(Intent::OpenIntegration(Integration::TradingBot))
        );
    }

    #[test]
    fn test_namespaced_wins_over_keywords() {
        // "hi" in the arguments must not trigger the greeting rule
        let result = dispatch("email.create(text:hi,layoutPrompt)");
        assert_eq!(result.actions.len(), 1);
        assert_eq!(result.actions[0].kind, "email_action");
    }

    #[test]
    fn test_route_display() {
        assert_eq!(interpret("system.verify").route.to_string(), "system.verify");
        assert_eq!(interpret("hello").route.to_string(), "greeting");
    }
}
