pub mod action;
pub mod arguments;
pub mod intent;

pub use action::{ActionRecord, CommandResult, CLARIFICATION_RESPONSE};
pub use arguments::Arguments;
pub use intent::{Integration, Intent};
