//! Krake Core - command interpreter for the orchestration gateway
//!
//! Turns short operator commands into declarative action records:
//! - `tokenizer`: recognizes `namespace.operation(key:value,...)`
//! - `matcher`: ordered keyword rules for free text
//! - `resolver`: catalog lookup and argument binding
//! - `dispatcher`: composition of the three, pure and total
//!
//! The error and logging facilities used by the gateway layers live here
//! too.

pub mod dispatcher;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod resolver;
pub mod tokenizer;

// Re-export commonly used types
pub use dispatcher::{dispatch, interpret, Interpretation, Route};
pub use errors::{ExError, ExErrorKind, KrakeError, Result};
pub use model::{ActionRecord, Arguments, CommandResult, Integration, Intent};
pub use tokenizer::ParsedInvocation;
