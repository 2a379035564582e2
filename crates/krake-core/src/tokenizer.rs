//! Invocation tokenizer
//!
//! Recognizes the structured command shape
//!
//! ```text
//! identifier ("." identifier)* [ "(" key ":" value ("," key ":" value)* ")" ]
//! ```
//!
//! where an identifier is ASCII alphanumerics and `_`. Anything else is not
//! an invocation and is left for the domain matcher.

use crate::model::Arguments;

/// A command recognized as `namespace.operation(args)`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInvocation {
    /// First dotted segment; `None` for a bare identifier such as `hello`
    pub namespace: Option<String>,
    /// Everything after the first dot, or the bare identifier itself
    pub operation: Option<String>,
    pub arguments: Arguments,
}

impl ParsedInvocation {
    /// Namespace and operation, when both are present
    pub fn target(&self) -> Option<(&str, &str)> {
        match (&self.namespace, &self.operation) {
            (Some(ns), Some(op)) => Some((ns.as_str(), op.as_str())),
            _ => None,
        }
    }
}

/// Parse a command into an invocation
///
/// Returns `None` for input that does not match the invocation shape. Never
/// panics. Case is preserved; callers normalize before parsing.
///
/// # Example
///
/// ```
/// use krake_core::tokenizer::parse;
///
/// let inv = parse("email.send(recipients:list,campaignid:123)").unwrap();
/// assert_eq!(inv.target(), Some(("email", "send")));
/// assert_eq!(inv.arguments.get("campaignid"), Some("123"));
///
/// assert!(parse("create a task").is_none());
/// ```
pub fn parse(raw: &str) -> Option<ParsedInvocation> {
    let input = raw.trim();

    let (head, body) = match input.find('(') {
        Some(open) => {
            let inner = input[open + 1..].strip_suffix(')')?;
            (&input[..open], Some(inner))
        }
        None => (input, None),
    };

    if !is_dotted_identifier(head) {
        return None;
    }

    let (namespace, operation) = match head.split_once('.') {
        Some((ns, op)) => (Some(ns.to_string()), Some(op.to_string())),
        None => (None, Some(head.to_string())),
    };

    Some(ParsedInvocation {
        namespace,
        operation,
        arguments: body.map(parse_arguments).unwrap_or_default(),
    })
}

/// Split an argument body into key/value pairs
///
/// Fragments without a colon are dropped.
pub fn parse_arguments(body: &str) -> Arguments {
    let mut args = Arguments::new();
    for fragment in body.split(',') {
        if let Some((key, value)) = fragment.split_once(':') {
            args.insert(key.trim(), value.trim());
        }
    }
    args
}

fn is_dotted_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_arguments() {
        let inv = parse("trading.activatestrategy(id:abc123)").unwrap();
        assert_eq!(inv.namespace.as_deref(), Some("trading"));
        assert_eq!(inv.operation.as_deref(), Some("activatestrategy"));
        assert_eq!(inv.arguments.get("id"), Some("abc123"));
    }

    #[test]
    fn test_parse_without_parentheses() {
        let inv = parse("affiliate.getnetworks").unwrap();
        assert_eq!(inv.target(), Some(("affiliate", "getnetworks")));
        assert!(inv.arguments.is_empty());
    }

    #[test]
    fn test_empty_parentheses_give_empty_arguments() {
        let inv = parse("email.list()").unwrap();
        assert!(inv.arguments.is_empty());
    }

    #[test]
    fn test_bare_identifier_has_no_namespace() {
        let inv = parse("hello").unwrap();
        assert_eq!(inv.namespace, None);
        assert_eq!(inv.operation.as_deref(), Some("hello"));
        assert_eq!(inv.target(), None);
    }

    #[test]
    fn test_operation_keeps_remaining_dots() {
        let inv = parse("monarch.content.sync").unwrap();
        assert_eq!(inv.target(), Some(("monarch", "content.sync")));
    }

    #[test]
    fn test_colonless_fragment_dropped() {
        let inv = parse("email.create(text:hi,layoutprompt)").unwrap();
        assert_eq!(inv.arguments.len(), 1);
        assert_eq!(inv.arguments.get("text"), Some("hi"));
    }

    #[test]
    fn test_value_split_on_first_colon_and_trimmed() {
        let inv = parse("system.test( note : at 10:30 , mode:full )").unwrap();
        assert_eq!(inv.arguments.get("note"), Some("at 10:30"));
        assert_eq!(inv.arguments.get("mode"), Some("full"));
    }

    #[test]
    fn test_values_may_contain_spaces() {
        let inv = parse("email.reply(message:customer asking about order)").unwrap();
        assert_eq!(
            inv.arguments.get("message"),
            Some("customer asking about order")
        );
    }

    #[test]
    fn test_non_matching_input() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("create a task").is_none());
        assert!(parse("email.send(recipients:list").is_none());
        assert!(parse("email..send").is_none());
        assert!(parse(".send").is_none());
        assert!(parse("email.").is_none());
        assert!(parse("email.send (x:1)").is_none());
        assert!(parse("email.send)").is_none());
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let inv = parse("  system.verify  ").unwrap();
        assert_eq!(inv.target(), Some(("system", "verify")));
    }
}
