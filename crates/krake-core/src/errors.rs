use krake_core_types::{RequestId, WorkspaceId};
use thiserror::Error;

/// Result type alias using KrakeError
pub type Result<T> = std::result::Result<T, KrakeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by operator interfaces and
/// tests. The interpreter itself never produces errors; these kinds cover the
/// gateway around it (request validation, collaborator routing, config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request validation
    InvalidInput,
    InvalidWorkspace,
    CommandTooLong,

    // Collaborator routing
    CollaboratorUnavailable,
    ExternalService,

    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Config,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidWorkspace => "ERR_INVALID_WORKSPACE",
            ExErrorKind::CommandTooLong => "ERR_COMMAND_TOO_LONG",
            ExErrorKind::CollaboratorUnavailable => "ERR_COLLABORATOR_UNAVAILABLE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging and
/// for structured log fields.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    workspace_id: Option<WorkspaceId>,
    action_type: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            workspace_id: None,
            action_type: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_workspace_id(mut self, workspace_id: WorkspaceId) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// Add the action type of the record being routed
    pub fn with_action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = Some(action_type.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn workspace_id(&self) -> Option<&WorkspaceId> {
        self.workspace_id.as_ref()
    }

    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(action_type) = &self.action_type {
            write!(f, " (action_type: {})", action_type)?;
        }
        if let Some(workspace_id) = &self.workspace_id {
            write!(f, " (workspace_id: {})", workspace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for gateway operations around the interpreter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KrakeError {
    /// Workspace id is not a UUID
    #[error("Invalid workspace id: {value}")]
    InvalidWorkspaceId { value: String },

    /// Request carried no command text
    #[error("Command is empty")]
    EmptyCommand,

    /// Command exceeds the configured length limit
    #[error("Command is {len} bytes, limit is {max}")]
    CommandTooLong { len: usize, max: usize },

    /// No collaborator is registered for an action type
    #[error("No collaborator registered for action type: {action_type}")]
    NoCollaborator { action_type: String },

    /// A collaborator rejected or failed an action
    #[error("Collaborator for {action_type} failed: {message}")]
    CollaboratorFailed {
        action_type: String,
        message: String,
    },

    /// History entry lookup missed
    #[error("History entry not found: {id}")]
    HistoryEntryNotFound { id: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading operator input failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<KrakeError> for ExError {
    fn from(err: KrakeError) -> Self {
        match err {
            KrakeError::InvalidWorkspaceId { value } => ExError::new(ExErrorKind::InvalidWorkspace)
                .with_message(format!("Workspace id is not a UUID: {}", value)),

            KrakeError::EmptyCommand => {
                ExError::new(ExErrorKind::InvalidInput).with_message("Command is empty")
            }

            KrakeError::CommandTooLong { len, max } => ExError::new(ExErrorKind::CommandTooLong)
                .with_message(format!("Command is {} bytes, limit is {}", len, max)),

            KrakeError::NoCollaborator { action_type } => {
                ExError::new(ExErrorKind::CollaboratorUnavailable)
                    .with_action_type(action_type)
                    .with_message("No collaborator registered")
            }

            KrakeError::CollaboratorFailed {
                action_type,
                message,
            } => ExError::new(ExErrorKind::ExternalService)
                .with_action_type(action_type)
                .with_message(message),

            KrakeError::HistoryEntryNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_op("history_get")
                .with_message(format!("History entry not found: {}", id)),

            KrakeError::Config { message } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }

            KrakeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            KrakeError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_json::Error> for KrakeError {
    fn from(err: serde_json::Error) -> Self {
        KrakeError::Serialization {
            message: err.to_string(),
        }
    }
}
