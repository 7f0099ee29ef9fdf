// File: crates/sparkline-host/src/error.rs
// Summary: Errors surfaced to the host while handling an update.

use sparkline_core::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    /// A host payload could not be decoded.
    #[error("could not read {what}: {source}")]
    InvalidPayload {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl HostError {
    /// Title for the host's inline error surface.
    pub fn title(&self) -> &'static str {
        match self {
            HostError::InvalidPayload { .. } => "Invalid Data",
            HostError::Configuration(e) => e.title(),
        }
    }
}
