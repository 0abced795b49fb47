//! JSON snapshot of a loaded store.
//!
//! A snapshot is a flat serialized copy of a [`RecordStore`]: the schema plus one
//! field → value object per record. Its only job is to round-trip a store verbatim
//! (order and values), so the one-time CSV read does not have to be repeated.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "schema": { "fields": [ { "name": "Batch ID", "data_type": "utf8" } ] },
//!   "records": [ { "Batch ID": "ELP5726" } ]
//! }
//! ```
//!
//! `Absent` serializes as JSON `null`.

use std::fs;
use std::path::Path;

use crate::error::{StoreError, StoreResult};
use crate::types::{DataType, RecordStore, Schema, Value};

/// Write a store to `path` as a JSON snapshot document.
pub fn save_snapshot(store: &RecordStore, path: impl AsRef<Path>) -> StoreResult<()> {
    let text = snapshot_to_string(store)?;
    fs::write(path, text)?;
    Ok(())
}

/// Load a store back from a JSON snapshot document at `path`.
pub fn load_snapshot(path: impl AsRef<Path>) -> StoreResult<RecordStore> {
    let text = fs::read_to_string(path)?;
    snapshot_from_str(&text)
}

/// Serialize a store to the snapshot document string.
pub fn snapshot_to_string(store: &RecordStore) -> StoreResult<String> {
    let mut records = Vec::with_capacity(store.len());
    for record in store {
        let mut obj = serde_json::Map::new();
        for (name, value) in record.entries() {
            obj.insert(name.to_owned(), value_to_json(value));
        }
        records.push(serde_json::Value::Object(obj));
    }

    let doc = serde_json::json!({
        "schema": store.schema(),
        "records": records,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a snapshot document string back into a store.
pub fn snapshot_from_str(input: &str) -> StoreResult<RecordStore> {
    let doc: serde_json::Value = serde_json::from_str(input)?;

    let schema_value = doc
        .get("schema")
        .ok_or_else(|| StoreError::SchemaMismatch {
            message: "snapshot document has no 'schema' key".to_string(),
        })?
        .clone();
    let schema: Schema = serde_json::from_value(schema_value)?;

    let records = doc
        .get("records")
        .and_then(|v| v.as_array())
        .ok_or_else(|| StoreError::SchemaMismatch {
            message: "snapshot document has no 'records' array".to_string(),
        })?;

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());
    for (idx0, entry) in records.iter().enumerate() {
        let row_num = idx0 + 1;
        let obj = entry.as_object().ok_or_else(|| StoreError::SchemaMismatch {
            message: format!("record {row_num} is not a json object"),
        })?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let jv = obj.get(&field.name).ok_or_else(|| StoreError::SchemaMismatch {
                message: format!("record {row_num} missing required field '{}'", field.name),
            })?;
            row.push(json_to_value(row_num, &field.name, field.data_type, jv)?);
        }
        rows.push(row);
    }

    Ok(RecordStore::new(schema, rows))
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Absent => serde_json::Value::Null,
        Value::Float64(v) => serde_json::Number::from_f64(*v)
            .map(serde_json::Value::Number)
            // Non-finite floats cannot appear in JSON; store them as the absent marker.
            .unwrap_or(serde_json::Value::Null),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
    }
}

fn json_to_value(
    row: usize,
    column: &str,
    data_type: DataType,
    jv: &serde_json::Value,
) -> StoreResult<Value> {
    match (data_type, jv) {
        (_, serde_json::Value::Null) => Ok(Value::Absent),
        (DataType::Float64, serde_json::Value::Number(n)) => match n.as_f64() {
            Some(v) => Ok(Value::Float64(v)),
            None => Err(StoreError::ParseError {
                row,
                column: column.to_owned(),
                raw: n.to_string(),
                message: "number does not fit in f64".to_string(),
            }),
        },
        (DataType::Utf8, serde_json::Value::String(s)) => Ok(Value::Utf8(s.clone())),
        (expected, other) => Err(StoreError::ParseError {
            row,
            column: column.to_owned(),
            raw: other.to_string(),
            message: format!("expected {expected:?} value"),
        }),
    }
}
