//! Namespace operation catalog
//!
//! Closed table of the structured commands the gateway understands, keyed
//! by `(namespace, operation)`. Names are matched ignoring ASCII case; the
//! `action` field of the produced record always carries the canonical
//! spelling listed here.

use crate::model::Arguments;

/// Placeholder a response template uses for the routed handler
pub const HANDLER_PLACEHOLDER: &str = "@handler";

/// Content-based choice of the agent that handles an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerRoute {
    /// Argument inspected
    pub argument: &'static str,
    /// Phrase looked for, case-insensitively
    pub needle: &'static str,
    pub matched: &'static str,
    pub fallback: &'static str,
}

impl HandlerRoute {
    pub fn route(&self, args: &Arguments) -> &'static str {
        let hit = args
            .get_ignore_ascii_case(self.argument)
            .is_some_and(|value| value.to_lowercase().contains(self.needle));
        if hit {
            self.matched
        } else {
            self.fallback
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Canonical operation name
    pub name: &'static str,
    /// Response template; see `resolver::template`
    pub response: &'static str,
    /// Whether the record carries the bound arguments
    pub binds_args: bool,
    pub handler: Option<HandlerRoute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceSpec {
    pub name: &'static str,
    /// Value of the record's `type` field
    pub action_type: &'static str,
    pub operations: &'static [OperationSpec],
}

impl NamespaceSpec {
    pub fn operation(&self, name: &str) -> Option<&'static OperationSpec> {
        self.operations
            .iter()
            .find(|op| op.name.eq_ignore_ascii_case(name))
    }
}

const fn op(name: &'static str, response: &'static str) -> OperationSpec {
    OperationSpec {
        name,
        response,
        binds_args: true,
        handler: None,
    }
}

const fn bare_op(name: &'static str, response: &'static str) -> OperationSpec {
    OperationSpec {
        name,
        response,
        binds_args: false,
        handler: None,
    }
}

pub const CUSTOMER_EMAIL_ROUTE: HandlerRoute = HandlerRoute {
    argument: "message",
    needle: "customer",
    matched: "Cassie - Customer Email Responder",
    fallback: "Krake",
};

const EMAIL_OPERATIONS: &[OperationSpec] = &[
    op("create", "Creating email with {text} and layout {layoutPrompt}"),
    op("send", "Sending email to {recipients|recipients}"),
    op("list", "Listing emails for workspace {workspace|current workspace}"),
    OperationSpec {
        name: "reply",
        response: "Replying to email message. Handled by: {@handler}",
        binds_args: true,
        handler: Some(CUSTOMER_EMAIL_ROUTE),
    },
];

const MONARCH_OPERATIONS: &[OperationSpec] = &[
    bare_op("getAppVersion", "Retrieving latest Monarch app version."),
    bare_op("syncWeeklyContent", "Syncing weekly content for the Monarch app."),
    op("generateWorkoutPlan", "Generating workout plan with Gigi."),
    op("resetWorkoutPlan", "Resetting workout plan."),
    op("moderateCommunity", "Moderating community content."),
    op("updateUI", "Updating UI elements in the Monarch app."),
];

const AFFILIATE_OPERATIONS: &[OperationSpec] = &[
    bare_op("getNetworks", "Retrieving affiliate networks."),
    op("getProducts", "Retrieving affiliate products."),
    op("getLinks", "Retrieving affiliate links."),
    op("getEarnings", "Retrieving affiliate earnings."),
    op("getStatistics", "Retrieving affiliate statistics."),
    op("createLink", "Creating affiliate link."),
];

const TRADING_OPERATIONS: &[OperationSpec] = &[
    bare_op("getStrategies", "Retrieving trading strategies."),
    op("activateStrategy", "Activating trading strategy."),
    op("deactivateStrategy", "Deactivating trading strategy."),
    op("getTrades", "Retrieving trading history."),
    op("getStatistics", "Retrieving trading statistics."),
];

const SYSTEM_OPERATIONS: &[OperationSpec] = &[
    op("test", "Running full system integrity test."),
    op("verify", "Verifying system integrity."),
];

/// Every namespace the gateway routes
pub const NAMESPACES: &[NamespaceSpec] = &[
    NamespaceSpec {
        name: "email",
        action_type: "email_action",
        operations: EMAIL_OPERATIONS,
    },
    NamespaceSpec {
        name: "monarch",
        action_type: "monarch_action",
        operations: MONARCH_OPERATIONS,
    },
    NamespaceSpec {
        name: "affiliate",
        action_type: "affiliate_action",
        operations: AFFILIATE_OPERATIONS,
    },
    NamespaceSpec {
        name: "trading",
        action_type: "trading_action",
        operations: TRADING_OPERATIONS,
    },
    NamespaceSpec {
        name: "system",
        action_type: "system_action",
        operations: SYSTEM_OPERATIONS,
    },
];

pub fn namespace(name: &str) -> Option<&'static NamespaceSpec> {
    NAMESPACES
        .iter()
        .find(|ns| ns.name.eq_ignore_ascii_case(name))
}

/// Find the entry for a namespace/operation pair
pub fn lookup(
    namespace_name: &str,
    operation: &str,
) -> Option<(&'static NamespaceSpec, &'static OperationSpec)> {
    let ns = namespace(namespace_name)?;
    let op = ns.operation(operation)?;
    Some((ns, op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let (ns, op) = lookup("trading", "activatestrategy").unwrap();
        assert_eq!(ns.action_type, "trading_action");
        assert_eq!(op.name, "activateStrategy");

        assert!(lookup("TRADING", "ActivateStrategy").is_some());
    }

    #[test]
    fn test_unknown_operation_in_known_namespace() {
        assert!(namespace("trading").is_some());
        assert!(lookup("trading", "liquidate").is_none());
    }

    #[test]
    fn test_unknown_namespace() {
        assert!(lookup("social", "post").is_none());
    }

    #[test]
    fn test_operation_names_unique_within_namespace() {
        for ns in NAMESPACES {
            for (i, a) in ns.operations.iter().enumerate() {
                for b in &ns.operations[i + 1..] {
                    assert!(
                        !a.name.eq_ignore_ascii_case(b.name),
                        "duplicate operation {} in {}",
                        a.name,
                        ns.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_handler_placeholder_only_on_routed_operations() {
        use crate::resolver::template::placeholders;

        for ns in NAMESPACES {
            for op in ns.operations {
                let uses_handler = placeholders(op.response).contains(&HANDLER_PLACEHOLDER);
                assert_eq!(
                    uses_handler,
                    op.handler.is_some(),
                    "{}.{}",
                    ns.name,
                    op.name
                );
            }
        }
    }

    #[test]
    fn test_handler_route() {
        let customer: Arguments = [("message", "Customer asking about order")]
            .into_iter()
            .collect();
        let internal: Arguments = [("message", "internal memo")].into_iter().collect();

        assert_eq!(
            CUSTOMER_EMAIL_ROUTE.route(&customer),
            "Cassie - Customer Email Responder"
        );
        assert_eq!(CUSTOMER_EMAIL_ROUTE.route(&internal), "Krake");
        assert_eq!(CUSTOMER_EMAIL_ROUTE.route(&Arguments::new()), "Krake");
    }
}
