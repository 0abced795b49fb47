//! Core data model types.
//!
//! This crate loads a uniform-schema tabular source into an immutable in-memory
//! [`RecordStore`], using a user-provided [`Schema`] (a list of typed [`Field`]s).
//! Every query-layer operation is a pure function over [`Record`]s drawn from a store.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Logical data type for a schema field.
///
/// The plating dataset only distinguishes numeric measurements from identifier/status
/// strings, so two types suffice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64-bit floating point measurement.
    Float64,
    /// UTF-8 string (identifiers, categorical/status fields).
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the shape shared by every record in a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single value in a [`Record`].
///
/// [`Value::Absent`] is the dataset's missing-measurement marker (the source data's
/// NaN). It is a valid value, not an error: accessors surface it as `None` and
/// aggregations skip it explicitly, never coercing it to zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing measurement.
    Absent,
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Numeric view of the value; `Absent` maps to `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// String view of the value; `Absent` maps to `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "NaN"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

/// One observation row: an immutable field → value mapping.
///
/// Records share their [`Schema`] via `Arc`, so cloning a record is cheap and a
/// store full of records carries a single schema allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(schema: Arc<Schema>, values: Vec<Value>) -> Self {
        Self { schema, values }
    }

    /// The schema this record conforms to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Look up a field's value by name.
    ///
    /// Fails with [`QueryError::FieldNotFound`] if the field is not part of the
    /// schema. A [`Value::Absent`] cell is returned as-is, never defaulted.
    pub fn get(&self, field: &str) -> QueryResult<&Value> {
        match self.schema.index_of(field) {
            Some(idx) => Ok(&self.values[idx]),
            None => Err(QueryError::FieldNotFound {
                field: field.to_owned(),
            }),
        }
    }

    /// Numeric view of a field; `Absent` maps to `Ok(None)`.
    pub fn number(&self, field: &str) -> QueryResult<Option<f64>> {
        Ok(self.get(field)?.as_number())
    }

    /// String view of a field; `Absent` maps to `Ok(None)`.
    pub fn text(&self, field: &str) -> QueryResult<Option<&str>> {
        Ok(self.get(field)?.as_text())
    }

    /// Iterate `(field name, value)` pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .zip(self.values.iter())
    }

    /// The raw values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// The full loaded dataset: an ordered, insertion-order-preserving, immutable
/// sequence of [`Record`]s with a uniform schema.
///
/// A store is created once (batch load) and read-only thereafter, so any number
/// of pipelines may run over it without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store from a schema and row-major values.
    ///
    /// # Panics
    ///
    /// Panics if any row's length does not match the schema field count.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let schema = Arc::new(schema);
        let expected_len = schema.fields.len();
        let records = rows
            .into_iter()
            .map(|values| {
                assert!(
                    values.len() == expected_len,
                    "row length {} does not match schema length {}",
                    values.len(),
                    expected_len
                );
                Record::new(Arc::clone(&schema), values)
            })
            .collect();
        Self { schema, records }
    }

    pub(crate) fn from_records(schema: Arc<Schema>, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    /// The store's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn schema_arc(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at position `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// A new store holding the first `n` records (or all of them if `n` exceeds
    /// the length). Insertion order is preserved.
    pub fn head(&self, n: usize) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            records: self.records.iter().take(n).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
