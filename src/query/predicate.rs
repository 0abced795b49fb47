//! Reusable record predicates.
//!
//! A [`Predicate`] is a pure `Record -> bool` check built from a field name, a
//! comparison operator, and a threshold value. Operator validation happens at
//! build time (a bad symbol fails with
//! [`crate::error::QueryError::UnsupportedOperator`] before any record is
//! touched), not at match time.

use std::cmp::Ordering;

use crate::error::{QueryError, QueryResult};
use crate::query::accessor::FieldAccessor;
use crate::types::{Record, Value};

/// Closed set of supported comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl CmpOp {
    /// Parse an operator symbol; anything outside `{==, !=, <, >, <=, >=}` fails
    /// with [`QueryError::UnsupportedOperator`].
    pub fn from_symbol(symbol: &str) -> QueryResult<Self> {
        match symbol {
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            "<=" => Ok(Self::Le),
            ">=" => Ok(Self::Ge),
            _ => Err(QueryError::UnsupportedOperator {
                symbol: symbol.to_owned(),
            }),
        }
    }

    fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Eq => ord == Ordering::Equal,
            Self::Ne => ord != Ordering::Equal,
            Self::Lt => ord == Ordering::Less,
            Self::Gt => ord == Ordering::Greater,
            Self::Le => ord != Ordering::Greater,
            Self::Ge => ord != Ordering::Less,
        }
    }
}

/// A reusable, pure `Record -> bool` predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Compare a field's value against a threshold.
    Compare {
        /// Accessor for the compared field.
        accessor: FieldAccessor,
        /// Comparison operator.
        op: CmpOp,
        /// Right-hand side threshold.
        rhs: Value,
    },
    /// Logical AND, short-circuiting left to right.
    All(Vec<Predicate>),
}

impl Predicate {
    /// `record[field] > threshold`.
    pub fn field_above(field: impl Into<String>, threshold: f64) -> Self {
        Self::Compare {
            accessor: FieldAccessor::new(field),
            op: CmpOp::Gt,
            rhs: Value::Float64(threshold),
        }
    }

    /// `record[field] < threshold`.
    pub fn field_below(field: impl Into<String>, threshold: f64) -> Self {
        Self::Compare {
            accessor: FieldAccessor::new(field),
            op: CmpOp::Lt,
            rhs: Value::Float64(threshold),
        }
    }

    /// `record[field] == rhs`.
    pub fn field_equals(field: impl Into<String>, rhs: impl Into<Value>) -> Self {
        Self::Compare {
            accessor: FieldAccessor::new(field),
            op: CmpOp::Eq,
            rhs: rhs.into(),
        }
    }

    /// Build a comparison from an operator symbol. Fails fast at build time for
    /// unsupported symbols.
    pub fn compare(
        field: impl Into<String>,
        symbol: &str,
        rhs: impl Into<Value>,
    ) -> QueryResult<Self> {
        Ok(Self::Compare {
            accessor: FieldAccessor::new(field),
            op: CmpOp::from_symbol(symbol)?,
            rhs: rhs.into(),
        })
    }

    /// Logical AND of predicates, short-circuiting left to right.
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Self::All(predicates)
    }

    /// Evaluate the predicate against a record.
    ///
    /// Comparisons involving an [`Value::Absent`] cell (or mismatched value types)
    /// are `false`; a field missing from the schema fails with
    /// [`QueryError::FieldNotFound`].
    pub fn matches(&self, record: &Record) -> QueryResult<bool> {
        match self {
            Self::Compare { accessor, op, rhs } => {
                let lhs = accessor.value(record)?;
                Ok(match compare_values(lhs, rhs) {
                    Some(ord) => op.holds(ord),
                    None => false,
                })
            }
            Self::All(predicates) => {
                for p in predicates {
                    if !p.matches(record)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

/// Ordering between two values of the same kind; `None` for `Absent` operands or
/// mixed numeric/text comparisons.
fn compare_values(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::Float64(a), Value::Float64(b)) => a.partial_cmp(b),
        (Value::Utf8(a), Value::Utf8(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{CmpOp, Predicate};
    use crate::error::QueryError;
    use crate::types::{DataType, Field, RecordStore, Schema, Value};

    fn ph_store() -> RecordStore {
        let schema = Schema::new(vec![
            Field::new("pH Level", DataType::Float64),
            Field::new("Pass/Fail", DataType::Utf8),
        ]);
        RecordStore::new(
            schema,
            vec![
                vec![Value::Float64(5.0), Value::from("Pass")],
                vec![Value::Float64(4.2), Value::from("Fail")],
                vec![Value::Absent, Value::from("Pass")],
            ],
        )
    }

    #[test]
    fn condition_checker_matches_above_threshold() {
        let store = ph_store();
        let checker = Predicate::compare("pH Level", ">", 4.9).unwrap();
        assert!(checker.matches(store.get(0).unwrap()).unwrap());
        assert!(!checker.matches(store.get(1).unwrap()).unwrap());
    }

    #[test]
    fn unknown_symbol_fails_at_build_time() {
        let err = Predicate::compare("pH Level", "?", 4.9).unwrap_err();
        assert_eq!(
            err,
            QueryError::UnsupportedOperator {
                symbol: "?".to_string()
            }
        );
    }

    #[test]
    fn from_symbol_covers_the_closed_set() {
        for (symbol, op) in [
            ("==", CmpOp::Eq),
            ("!=", CmpOp::Ne),
            ("<", CmpOp::Lt),
            (">", CmpOp::Gt),
            ("<=", CmpOp::Le),
            (">=", CmpOp::Ge),
        ] {
            assert_eq!(CmpOp::from_symbol(symbol).unwrap(), op);
        }
    }

    #[test]
    fn absent_never_satisfies_a_comparison() {
        let store = ph_store();
        let absent = store.get(2).unwrap();
        assert!(!Predicate::field_above("pH Level", 0.0).matches(absent).unwrap());
        assert!(!Predicate::field_below("pH Level", 100.0).matches(absent).unwrap());
    }

    #[test]
    fn text_equality() {
        let store = ph_store();
        let passed = Predicate::field_equals("Pass/Fail", "Pass");
        assert!(passed.matches(store.get(0).unwrap()).unwrap());
        assert!(!passed.matches(store.get(1).unwrap()).unwrap());
    }

    #[test]
    fn conjunction_short_circuits_left_to_right() {
        let store = ph_store();
        // Second leg references a missing field; short-circuit on the first leg
        // means the conjunction never observes it.
        let conj = Predicate::all(vec![
            Predicate::field_equals("Pass/Fail", "Fail"),
            Predicate::field_above("No Such Field", 1.0),
        ]);
        assert!(!conj.matches(store.get(0).unwrap()).unwrap());
        // With the first leg true, the second leg's error surfaces.
        assert!(conj.matches(store.get(1).unwrap()).is_err());
    }

    #[test]
    fn predicates_are_reusable_across_runs() {
        let store = ph_store();
        let checker = Predicate::field_above("pH Level", 4.9);
        let first: Vec<bool> = store
            .iter()
            .map(|r| checker.matches(r).unwrap())
            .collect();
        let second: Vec<bool> = store
            .iter()
            .map(|r| checker.matches(r).unwrap())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![true, false, false]);
    }
}
