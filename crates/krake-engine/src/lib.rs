//! Krake Engine - gateway layer around the command interpreter
//!
//! Validates requests, dispatches them through `krake-core`, keeps the
//! command journal, and hands produced actions to registered
//! collaborators. The engine owns lifecycle logging for these operations;
//! the core below it only emits debug events.

pub mod collaborator;
pub mod config;
pub mod gateway;
pub mod history;
pub mod request;

pub use collaborator::{
    route_actions, ActionOutcome, Collaborator, CollaboratorRegistry, NoopCollaborator,
    OutcomeStatus,
};
pub use config::GatewayConfig;
pub use gateway::Gateway;
pub use history::{CommandHistory, CommandHistoryItem};
pub use request::{CommandRequest, GatewayReply};
