// File: crates/sparkline-core/src/series.rs
// Summary: Result-set model (cells, rows, field descriptors, query schema).
// Notes:
// - Row order is significant: it is the left-to-right axis of the sparkline.
// - Cells are numeric or null; anything else is mapped to null at the boundary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single result cell: numeric or null.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(pub Option<f64>);

impl Cell {
    pub const NULL: Cell = Cell(None);

    pub const fn number(v: f64) -> Self { Self(Some(v)) }

    /// Numeric value, if any.
    #[inline]
    pub fn value(&self) -> Option<f64> { self.0 }

    /// Value used for summation: nulls count as zero.
    #[inline]
    pub fn value_or_zero(&self) -> f64 { self.0.unwrap_or(0.0) }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self { Self(Some(v)) }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self { Self(v) }
}

/// One query row, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow {
    cells: HashMap<String, Cell>,
}

impl ResultRow {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.insert(field, cell);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, cell: impl Into<Cell>) {
        self.cells.insert(field.into(), cell.into());
    }

    /// Cell for `field`; a missing key reads as null.
    pub fn get(&self, field: &str) -> Cell {
        self.cells.get(field).copied().unwrap_or(Cell::NULL)
    }
}

/// Ordered rows of a query result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn new(rows: Vec<ResultRow>) -> Self { Self { rows } }

    /// Convenience: single-field rows from plain values, in order.
    pub fn from_values(field: &str, values: &[Option<f64>]) -> Self {
        let rows = values.iter().map(|v| ResultRow::new().with(field, *v)).collect();
        Self { rows }
    }

    pub fn push(&mut self, row: ResultRow) { self.rows.push(row); }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn rows(&self) -> &[ResultRow] { &self.rows }

    /// Cells of one field in row order.
    pub fn column<'a>(&'a self, field: &'a str) -> impl Iterator<Item = Cell> + 'a {
        self.rows.iter().map(move |r| r.get(field))
    }
}

impl FromIterator<ResultRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Dimension,
    Measure,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub role: FieldRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldDescriptor {
    pub fn dimension(name: impl Into<String>) -> Self {
        Self { name: name.into(), role: FieldRole::Dimension, label: None }
    }

    pub fn measure(name: impl Into<String>) -> Self {
        Self { name: name.into(), role: FieldRole::Measure, label: None }
    }
}

/// Fields of a query, split by role in query order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuerySchema {
    pub dimensions: Vec<FieldDescriptor>,
    pub measures: Vec<FieldDescriptor>,
}

impl QuerySchema {
    pub fn new(dimensions: Vec<FieldDescriptor>, measures: Vec<FieldDescriptor>) -> Self {
        Self { dimensions, measures }
    }

    /// Split a flat descriptor list by role, preserving relative order.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let (dimensions, measures): (Vec<_>, Vec<_>) = fields
            .into_iter()
            .partition(|f| f.role == FieldRole::Dimension);
        Self { dimensions, measures }
    }
}
