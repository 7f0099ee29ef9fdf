// File: crates/sparkline-core/src/validate.rs
// Summary: Query-shape validation and field binding (dimension, series, value).

use crate::error::ConfigurationError;
use crate::series::QuerySchema;

/// Field names the renderer reads, resolved from a valid schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldBinding {
    pub dimension: String,
    /// First measure: drives the sparkline.
    pub series: String,
    /// Second measure: averaged into the headline value.
    pub value: String,
}

/// Check the role counts before any computation.
///
/// Exactly one dimension and exactly two measures are accepted; anything else
/// yields a [`ConfigurationError`] carrying the observed counts.
pub fn validate(schema: &QuerySchema) -> Result<FieldBinding, ConfigurationError> {
    match (schema.dimensions.as_slice(), schema.measures.as_slice()) {
        ([dimension], [series, value]) => Ok(FieldBinding {
            dimension: dimension.name.clone(),
            series: series.name.clone(),
            value: value.name.clone(),
        }),
        (dims, measures) => Err(ConfigurationError::new(dims.len(), measures.len())),
    }
}
