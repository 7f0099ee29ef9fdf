// File: crates/sparkline-core/src/error.rs
// Summary: Error taxonomy of the widget (query-shape configuration errors).

use thiserror::Error;

/// Title shown by the host's inline error surface.
pub const CONFIGURATION_ERROR_TITLE: &str = "Incorrect Configuration";

/// The query does not match the required {1 dimension, 2 measures} layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("This visualization requires exactly one dimension and two measures.")]
pub struct ConfigurationError {
    /// Number of dimensions the query actually carried.
    pub dimensions: usize,
    /// Number of measures the query actually carried.
    pub measures: usize,
}

impl ConfigurationError {
    pub const fn new(dimensions: usize, measures: usize) -> Self {
        Self { dimensions, measures }
    }

    pub fn title(&self) -> &'static str { CONFIGURATION_ERROR_TITLE }

    /// Human-readable message for the error surface.
    pub fn message(&self) -> String { self.to_string() }
}
