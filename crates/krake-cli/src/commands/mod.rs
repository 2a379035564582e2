//! CLI command implementations

pub mod batch;
pub mod catalog;
pub mod send;

use std::path::Path;

use krake_core::errors::KrakeError;
use krake_core::logging_facility;
use krake_core::resolver::action_types;
use krake_core_types::WorkspaceId;
use krake_engine::{CollaboratorRegistry, Gateway, GatewayConfig};
use serde::Serialize;

/// Load configuration and start logging
pub fn setup(config_path: Option<&Path>) -> Result<GatewayConfig, Box<dyn std::error::Error>> {
    let config = GatewayConfig::load(config_path)?;
    logging_facility::init(config.profile()?);
    Ok(config)
}

/// Gateway with a no-op collaborator for every action type
pub fn gateway(config: GatewayConfig) -> Gateway {
    Gateway::new(config).with_collaborators(CollaboratorRegistry::noop_for(action_types()))
}

/// Parse `--workspace`, defaulting to the unscoped workspace
pub fn workspace(arg: Option<&str>) -> Result<WorkspaceId, KrakeError> {
    match arg {
        Some(value) => WorkspaceId::parse(value).map_err(|_| KrakeError::InvalidWorkspaceId {
            value: value.to_string(),
        }),
        None => Ok(WorkspaceId::unscoped()),
    }
}

/// Encode one output value as JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, KrakeError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(KrakeError::from)
}

/// I/O failure on operator input, naming the source
pub fn input_error(source: &str, err: std::io::Error) -> KrakeError {
    KrakeError::Io {
        message: format!("{}: {}", source, err),
    }
}
