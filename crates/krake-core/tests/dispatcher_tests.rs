#![allow(clippy::unwrap_used, clippy::expect_used)]

use krake_core::model::CLARIFICATION_RESPONSE;
use krake_core::resolver::catalog::NAMESPACES;
use krake_core::{dispatch, interpret, Arguments, Intent, Route};

fn args(pairs: &[(&str, &str)]) -> Arguments {
    pairs.iter().copied().collect()
}

#[test]
fn test_affiliate_takes_priority_over_email() {
    let result = dispatch("affiliate and email");

    assert_eq!(result.response, "Opening Affiliate Bot Manager.");
    assert_eq!(result.actions.len(), 1);
    assert_eq!(result.actions[0].kind, "open_integration");
    assert_eq!(
        result.actions[0].integration.as_deref(),
        Some("affiliate_bot")
    );
}

#[test]
fn test_argument_binding() {
    let result = dispatch("trading.activateStrategy(id:abc123)");

    assert_eq!(result.actions.len(), 1);
    let action = &result.actions[0];
    assert_eq!(action.kind, "trading_action");
    assert_eq!(action.action.as_deref(), Some("activateStrategy"));
    assert_eq!(action.args, Some(args(&[("id", "abc123")])));

    let json = serde_json::to_value(action).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "trading_action",
            "action": "activateStrategy",
            "args": {"id": "abc123"}
        })
    );
}

#[test]
fn test_customer_email_routes_to_cassie() {
    let result = dispatch("email.reply(message:Customer asking about order)");

    assert_eq!(
        result.actions[0].handler.as_deref(),
        Some("Cassie - Customer Email Responder")
    );
    assert!(result
        .response
        .ends_with("Handled by: Cassie - Customer Email Responder"));
}

#[test]
fn test_internal_email_routes_to_krake() {
    let result = dispatch("email.reply(message:internal memo)");

    assert_eq!(result.actions[0].handler.as_deref(), Some("Krake"));
    assert_eq!(
        result.response,
        "Replying to email message. Handled by: Krake"
    );
}

#[test]
fn test_unrecognized_fallback() {
    let result = dispatch("xyzzy plugh");

    assert_eq!(result.response, CLARIFICATION_RESPONSE);
    assert_eq!(
        result.response,
        "I'm not sure how to process that command. Could you please rephrase?"
    );
    assert!(result.actions.is_empty());
}

#[test]
fn test_malformed_argument_fragment_dropped() {
    let result = dispatch("email.create(text:hi,layoutPrompt)");

    assert_eq!(result.actions.len(), 1);
    assert_eq!(result.actions[0].action.as_deref(), Some("create"));
    assert_eq!(result.actions[0].args, Some(args(&[("text", "hi")])));
}

#[test]
fn test_every_catalog_operation_yields_one_action() {
    for ns in NAMESPACES {
        for op in ns.operations {
            let command = format!("{}.{}", ns.name, op.name);
            let result = dispatch(&command);

            assert_eq!(result.actions.len(), 1, "{}", command);
            assert_eq!(result.actions[0].kind, ns.action_type, "{}", command);
            assert_eq!(
                result.actions[0].action.as_deref(),
                Some(op.name),
                "{}",
                command
            );
        }
    }
}

#[test]
fn test_unknown_namespace_uses_keyword_rules() {
    // "social" is not a namespace; the text still mentions shopify
    let result = dispatch("social.shopify");
    assert_eq!(result.actions[0].integration.as_deref(), Some("shopify"));

    let result = dispatch("weather.today");
    assert!(result.is_unrecognized());
}

#[test]
fn test_keyword_ladder() {
    let cases = [
        ("Hello there", "Hello! How can I assist you today?", None),
        (
            "please create a task for me",
            "I've created a new task for you.",
            Some("create_task"),
        ),
        (
            "check shopify orders",
            "I'm checking Shopify for you.",
            Some("open_integration"),
        ),
        (
            "gelato status",
            "I'm checking Gelato for you.",
            Some("open_integration"),
        ),
        (
            "binance balance",
            "I'm checking Binance for you.",
            Some("open_integration"),
        ),
        (
            "talk to sintra",
            "I'm connecting you with the Sintra AI agents.",
            Some("open_agents"),
        ),
        (
            "open the finance bot",
            "Opening ProfitPilot Trading Bot.",
            Some("open_integration"),
        ),
        (
            "open email",
            "Opening Email Builder & Manager.",
            Some("open_integration"),
        ),
    ];

    for (command, response, kind) in cases {
        let result = dispatch(command);
        assert_eq!(result.response, response, "{}", command);
        assert_eq!(
            result.actions.first().map(|a| a.kind.as_str()),
            kind,
            "{}",
            command
        );
    }
}

#[test]
fn test_task_requires_both_keywords() {
    assert_eq!(
        interpret("a task list").route,
        Route::Intent(Intent::Unrecognized)
    );
    assert_eq!(
        interpret("create a report").route,
        Route::Intent(Intent::Unrecognized)
    );
}

#[test]
fn test_hi_matches_as_substring() {
    // "this" contains "hi"
    assert_eq!(interpret("this").route, Route::Intent(Intent::Greeting));
}

#[test]
fn test_empty_command_is_unrecognized() {
    assert!(dispatch("").is_unrecognized());
    assert!(dispatch("   ").is_unrecognized());
}

#[test]
fn test_email_list_default_workspace() {
    let result = dispatch("email.list");
    assert_eq!(
        result.response,
        "Listing emails for workspace current workspace"
    );
    assert_eq!(result.actions[0].args, Some(Arguments::new()));
}

#[test]
fn test_bare_operation_ignores_arguments() {
    let result = dispatch("monarch.getAppVersion(channel:beta)");
    assert_eq!(result.response, "Retrieving latest Monarch app version.");
    assert_eq!(result.actions[0].args, None);
}

#[test]
fn test_command_result_json_shape() {
    let result = dispatch("hello");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "response": "Hello! How can I assist you today?",
            "actions": []
        })
    );
}

#[test]
fn test_large_argument_list_binds_every_key() {
    let body: Vec<String> = (0..40_000).map(|i| format!("k{}:v{}", i, i)).collect();
    let command = format!("system.test({})", body.join(","));

    let start = std::time::Instant::now();
    let result = dispatch(&command);
    let elapsed = start.elapsed();

    let args = result.actions[0].args.as_ref().unwrap();
    assert_eq!(args.len(), 40_000);
    assert_eq!(args.get("k39999"), Some("v39999"));
    assert_eq!(args.keys().next(), Some("k0"));
    // linear binding finishes well inside this bound even in debug builds
    assert!(elapsed.as_secs() < 2, "binding took {:?}", elapsed);
}
