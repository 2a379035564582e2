//! Core types shared across the Krake gateway crates
//!
//! - **Correlation types**: RequestId, TraceId, SpanId, WorkspaceId, RequestContext
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, SpanId, TraceId, WorkspaceId};
