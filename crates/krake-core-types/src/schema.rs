//! Canonical field keys and event names for structured logging

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";
pub const FIELD_SPAN_ID: &str = "span_id";
pub const FIELD_WORKSPACE_ID: &str = "workspace_id";

// Command routing
pub const FIELD_ROUTE: &str = "route";
pub const FIELD_NAMESPACE: &str = "namespace";
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_INTENT: &str = "intent";
pub const FIELD_ACTION_COUNT: &str = "action_count";
pub const FIELD_ACTION_TYPE: &str = "action_type";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Route values
pub const ROUTE_NAMESPACED: &str = "namespaced";
pub const ROUTE_INTENT: &str = "intent";
