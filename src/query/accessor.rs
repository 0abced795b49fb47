//! Field access for [`crate::types::Record`].

use crate::error::QueryResult;
use crate::types::{Record, Value};

/// A reusable accessor bound to a single field name.
///
/// Accessors are pure: given the same record they return the same value on every
/// call, and they hold no state beyond the field name. A field missing from the
/// record's schema fails with [`crate::error::QueryError::FieldNotFound`]; an
/// [`Value::Absent`] cell is a valid value that callers must check before doing
/// arithmetic, never a silent zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    field: String,
}

impl FieldAccessor {
    /// Bind an accessor to a field name.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// The bound field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The value stored under the bound field.
    pub fn value<'a>(&self, record: &'a Record) -> QueryResult<&'a Value> {
        record.get(&self.field)
    }

    /// Numeric view of the bound field; `Absent` maps to `Ok(None)`.
    pub fn number(&self, record: &Record) -> QueryResult<Option<f64>> {
        record.number(&self.field)
    }

    /// String view of the bound field; `Absent` maps to `Ok(None)`.
    pub fn text<'a>(&self, record: &'a Record) -> QueryResult<Option<&'a str>> {
        record.text(&self.field)
    }
}
