// File: crates/sparkline-host/tests/payload.rs
// Purpose: Validate decoding of host cells, rows and query responses.

use serde_json::json;
use sparkline_core::{Cell, FieldRole};
use sparkline_host::payload::{result_set, HostCell, HostRow, QueryResponse};

fn cell(v: serde_json::Value) -> Cell {
    serde_json::from_value::<HostCell>(json!({ "value": v })).expect("cell").to_cell()
}

#[test]
fn cells_map_numbers_and_numeric_strings() {
    assert_eq!(cell(json!(3)), Cell::number(3.0));
    assert_eq!(cell(json!(2.5)), Cell::number(2.5));
    assert_eq!(cell(json!(" 7.25 ")), Cell::number(7.25));
}

#[test]
fn everything_else_is_null() {
    assert_eq!(cell(json!(null)), Cell::NULL);
    assert_eq!(cell(json!("n/a")), Cell::NULL);
    assert_eq!(cell(json!(true)), Cell::NULL);
    assert_eq!(cell(json!({ "nested": 1 })), Cell::NULL);
    for text in ["NaN", "nan", "inf", "-inf", "infinity", "-Infinity"] {
        assert_eq!(cell(json!(text)), Cell::NULL, "{text}");
    }
    assert_eq!(cell(json!("1e400")), Cell::NULL);
    let missing: HostCell = serde_json::from_value(json!({ "rendered": "-" })).expect("cell");
    assert_eq!(missing.to_cell(), Cell::NULL);
}

#[test]
fn rows_keep_order() {
    let rows: Vec<HostRow> = serde_json::from_value(json!([
        { "m": { "value": 3 } },
        { "m": { "value": 1 } },
        { "m": { "value": 2 } }
    ]))
    .expect("rows");
    let set = result_set(&rows);
    let values: Vec<Option<f64>> = set.column("m").map(|c| c.value()).collect();
    assert_eq!(values, vec![Some(3.0), Some(1.0), Some(2.0)]);
}

#[test]
fn query_response_becomes_schema() {
    let q: QueryResponse = serde_json::from_value(json!({
        "fields": {
            "dimensions": [{ "name": "d", "label": "Day", "type": "date" }],
            "measures": [{ "name": "a" }, { "name": "b" }],
            "pivots": []
        },
        "data": []
    }))
    .expect("query response");
    let schema = q.schema();
    assert_eq!(schema.dimensions.len(), 1);
    assert_eq!(schema.dimensions[0].role, FieldRole::Dimension);
    assert_eq!(schema.dimensions[0].label.as_deref(), Some("Day"));
    assert_eq!(schema.measures.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn missing_field_lists_default_to_empty() {
    let q: QueryResponse = serde_json::from_value(json!({ "fields": {} })).expect("query response");
    let schema = q.schema();
    assert!(schema.dimensions.is_empty() && schema.measures.is_empty());
}

#[test]
fn non_finite_text_averages_as_null() {
    use sparkline_core::compute_average;
    let rows: Vec<HostRow> = serde_json::from_value(json!([
        { "b": { "value": "NaN" } },
        { "b": { "value": 4 } }
    ]))
    .expect("rows");
    assert_eq!(compute_average(&result_set(&rows), "b"), 2.0);
}
