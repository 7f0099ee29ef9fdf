// File: crates/sparkline-core/src/aggregate.rs
// Summary: Aggregation of a measure column into the headline value.

use crate::series::ResultSet;

/// Arithmetic mean of `field` over all rows.
///
/// Null or missing cells add 0 to the sum but still count in the divisor.
/// An empty result set averages to 0.
pub fn compute_average(rows: &ResultSet, field: &str) -> f64 {
    if rows.is_empty() { return 0.0; }
    let sum: f64 = rows.column(field).map(|c| c.value_or_zero()).sum();
    sum / rows.len() as f64
}

/// Series values of `field` in row order (nulls preserved as `None`).
pub fn series_values(rows: &ResultSet, field: &str) -> Vec<Option<f64>> {
    rows.column(field).map(|c| c.value()).collect()
}
