// File: crates/sparkline-host/src/payload.rs
// Summary: Serde models of the host's query response and data rows, and their conversion to core types.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as Json;
use sparkline_core::{Cell, FieldDescriptor, FieldRole, QuerySchema, ResultRow, ResultSet};

/// `queryResponse` as sent by the host; only the field lists are read.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub fields: QueryFields,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryFields {
    #[serde(default)]
    pub dimensions: Vec<HostField>,
    #[serde(default)]
    pub measures: Vec<HostField>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HostField {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// One data cell; the host wraps values as `{ "value": ..., "rendered": ... }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HostCell {
    #[serde(default)]
    pub value: Json,
    #[serde(default)]
    pub rendered: Option<String>,
}

impl HostCell {
    /// Finite numbers and numeric strings are numeric; everything else, `"NaN"` and `"inf"` included, is null.
    pub fn to_cell(&self) -> Cell {
        let v = match &self.value {
            Json::Number(n) => n.as_f64(),
            Json::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Cell(v.filter(|v| v.is_finite()))
    }
}

pub type HostRow = HashMap<String, HostCell>;

impl QueryResponse {
    pub fn schema(&self) -> QuerySchema {
        let convert = |f: &HostField, role: FieldRole| FieldDescriptor {
            name: f.name.clone(),
            role,
            label: f.label.clone(),
        };
        QuerySchema::new(
            self.fields.dimensions.iter().map(|f| convert(f, FieldRole::Dimension)).collect(),
            self.fields.measures.iter().map(|f| convert(f, FieldRole::Measure)).collect(),
        )
    }
}

/// Convert host rows, in order, into a result set.
pub fn result_set(rows: &[HostRow]) -> ResultSet {
    rows.iter()
        .map(|row| {
            row.iter().fold(ResultRow::new(), |acc, (name, cell)| acc.with(name.as_str(), cell.to_cell()))
        })
        .collect()
}
