use serde::{Deserialize, Serialize};

use super::Arguments;

/// Response given when no namespace operation or intent rule applies
pub const CLARIFICATION_RESPONSE: &str =
    "I'm not sure how to process that command. Could you please rephrase?";

/// Declarative instruction for a collaborator
///
/// Produced by the interpreter, never executed by it. Absent fields are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Arguments>,

    /// Agent that should handle the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    /// Integration panel to open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,

    /// Title for records the collaborator creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ActionRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            action: None,
            args: None,
            handler: None,
            integration: None,
            title: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_args(mut self, args: Arguments) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_integration(mut self, integration: impl Into<String>) -> Self {
        self.integration = Some(integration.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Output of a single dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub response: String,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

impl CommandResult {
    /// A reply with no actions attached
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(response: impl Into<String>, action: ActionRecord) -> Self {
        Self {
            response: response.into(),
            actions: vec![action],
        }
    }

    pub fn unrecognized() -> Self {
        Self::reply(CLARIFICATION_RESPONSE)
    }

    pub fn is_unrecognized(&self) -> bool {
        self.actions.is_empty() && self.response == CLARIFICATION_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = ActionRecord::new("open_agents");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"type": "open_agents"}));
    }

    #[test]
    fn test_action_record_wire_shape() {
        let record = ActionRecord::new("email_action")
            .with_action("reply")
            .with_args([("message", "hi")].into_iter().collect())
            .with_handler("Krake");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "email_action",
                "action": "reply",
                "args": {"message": "hi"},
                "handler": "Krake"
            })
        );
    }

    #[test]
    fn test_unrecognized_result() {
        let result = CommandResult::unrecognized();
        assert!(result.is_unrecognized());
        assert!(result.actions.is_empty());
        assert!(!CommandResult::reply("Hello! How can I assist you today?").is_unrecognized());
    }

    #[test]
    fn test_command_result_deserializes_without_actions() {
        let result: CommandResult =
            serde_json::from_str(r#"{"response":"Hello! How can I assist you today?"}"#).unwrap();
        assert!(result.actions.is_empty());
    }
}
