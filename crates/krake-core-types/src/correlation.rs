//! Correlation types for request tracking
//!
//! Every command that enters the gateway is tagged with a `RequestId` and,
//! when the caller supplies one, a `TraceId`. The workspace a command was
//! issued from travels alongside as a `WorkspaceId`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh time-ordered identifier (UUIDv7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Wrap an identifier received from a caller
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifier for a single gateway request
    RequestId
);

correlation_id!(
    /// Trace identifier propagated from the operator interface
    TraceId
);

correlation_id!(
    /// Span identifier within a trace
    SpanId
);

/// Opaque identifier of the workspace a command originated from.
///
/// The interpreter never looks inside it; collaborators use it to scope
/// the work an action describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse a workspace id from its hyphenated UUID form
    ///
    /// # Errors
    ///
    /// Returns the `uuid` parse error for anything that is not a UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s.trim()).map(Self)
    }

    /// The all-zero workspace, used when a caller does not name one
    pub fn unscoped() -> Self {
        Self(Uuid::nil())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Context carried with a request through the gateway
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
    pub span_id: Option<SpanId>,
    pub workspace_id: WorkspaceId,
}

impl RequestContext {
    /// Create a context with a fresh RequestId for the given workspace
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            request_id: RequestId::new(),
            trace_id: None,
            span_id: None,
            workspace_id,
        }
    }

    /// Create a context with an existing RequestId
    pub fn with_request_id(workspace_id: WorkspaceId, request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
            span_id: None,
            workspace_id,
        }
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_span_id(mut self, span_id: SpanId) -> Self {
        self.span_id = Some(span_id);
        self
    }
}
