//! Reusable record transforms and function composition.
//!
//! A [`Transform`] is a pure `Record -> Value` function built from a field name
//! and bound parameters (a configuration object rather than a captured closure,
//! so a transform can be inspected, cloned, and reused across pipeline runs).
//! Free-standing [`compose`] / [`compose_all`] cover value-level function
//! composition.
//!
//! ## Composition order
//!
//! `compose(f, g)` is the classic right-to-left `f(g(x))`. `compose_all` (and
//! [`Transform::chain`]) instead apply the list **left to right**:
//! `compose_all([f1, f2])(x) = f2(f1(x))`.
//!
//! ## Rounding
//!
//! All numeric transforms round their result to 2 decimal places using
//! round-half-away-from-zero (see [`round2`]).

use crate::error::{QueryError, QueryResult};
use crate::query::accessor::FieldAccessor;
use crate::types::{Record, Value};

/// Round to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Classic function composition: `compose(f, g)(x) = f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Compose a list of numeric functions, applied **left to right** in list order:
/// `compose_all([f1, f2])(x) = f2(f1(x))`.
pub fn compose_all(funcs: Vec<Box<dyn Fn(f64) -> f64>>) -> impl Fn(f64) -> f64 {
    move |x| funcs.iter().fold(x, |v, f| f(v))
}

/// A bound-parameter numeric operation, usable as a [`Transform::chain`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericOp {
    /// `x + offset`
    Add(f64),
    /// `x * factor`
    Mul(f64),
    /// `x / divisor` (build via [`NumericOp::div`] to reject zero divisors)
    Div(f64),
    /// `x ^ exponent`
    Pow(f64),
}

impl NumericOp {
    /// Validated division step; a zero divisor fails with
    /// [`QueryError::DivisionByZero`] at build time.
    pub fn div(divisor: f64) -> QueryResult<Self> {
        if divisor == 0.0 {
            Err(QueryError::DivisionByZero)
        } else {
            Ok(Self::Div(divisor))
        }
    }

    /// Apply the operation to a value.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Add(offset) => x + offset,
            Self::Mul(factor) => x * factor,
            Self::Div(divisor) => x / divisor,
            Self::Pow(exponent) => x.powf(exponent),
        }
    }
}

/// A reusable, pure `Record -> Value` transform.
///
/// Numeric transforms propagate [`Value::Absent`] unchanged: a missing
/// measurement stays missing through scaling, powers, and chains.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// `round2(value / divisor)`; build via [`Transform::scale`].
    Scale {
        /// Accessor for the scaled field.
        accessor: FieldAccessor,
        /// Non-zero divisor.
        divisor: f64,
    },
    /// `round2(value ^ exponent)`; build via [`Transform::power`].
    Power {
        /// Accessor for the transformed field.
        accessor: FieldAccessor,
        /// Exponent.
        exponent: f64,
    },
    /// Numeric ops applied left to right, then `round2`; build via
    /// [`Transform::chain`].
    Chain {
        /// Accessor for the transformed field.
        accessor: FieldAccessor,
        /// Steps applied in list order.
        ops: Vec<NumericOp>,
    },
    /// Display string with `{Field Name}` placeholders; build via
    /// [`Transform::report`].
    Report {
        /// Template text.
        template: String,
    },
    /// Label string: `above` when the field exceeds `cutoff`, else `below`;
    /// build via [`Transform::threshold`].
    Threshold {
        /// Accessor for the inspected field.
        accessor: FieldAccessor,
        /// Cutoff value (strictly-greater comparison).
        cutoff: f64,
        /// Label when `value > cutoff`.
        above: String,
        /// Label otherwise (including absent values).
        below: String,
    },
}

impl Transform {
    /// `record[field] / divisor`, rounded to 2 decimal places.
    ///
    /// Fails with [`QueryError::DivisionByZero`] at build time for a zero divisor.
    pub fn scale(field: impl Into<String>, divisor: f64) -> QueryResult<Self> {
        if divisor == 0.0 {
            return Err(QueryError::DivisionByZero);
        }
        Ok(Self::Scale {
            accessor: FieldAccessor::new(field),
            divisor,
        })
    }

    /// `record[field] ^ exponent`, rounded to 2 decimal places.
    pub fn power(field: impl Into<String>, exponent: f64) -> Self {
        Self::Power {
            accessor: FieldAccessor::new(field),
            exponent,
        }
    }

    /// Apply `ops` to `record[field]` left to right, then round to 2 decimal
    /// places.
    pub fn chain(field: impl Into<String>, ops: Vec<NumericOp>) -> Self {
        Self::Chain {
            accessor: FieldAccessor::new(field),
            ops,
        }
    }

    /// Format a display string from a template with `{Field Name}` placeholders,
    /// e.g. `"Batch {Batch ID}: {Thickness (μm)} μm"`. Absent values render as
    /// `NaN`. Never fails on records whose schema covers every placeholder.
    pub fn report(template: impl Into<String>) -> Self {
        Self::Report {
            template: template.into(),
        }
    }

    /// `above` when `record[field] > cutoff`, else `below`.
    pub fn threshold(
        field: impl Into<String>,
        cutoff: f64,
        above: impl Into<String>,
        below: impl Into<String>,
    ) -> Self {
        Self::Threshold {
            accessor: FieldAccessor::new(field),
            cutoff,
            above: above.into(),
            below: below.into(),
        }
    }

    /// Apply the transform to a record.
    pub fn apply(&self, record: &Record) -> QueryResult<Value> {
        match self {
            Self::Scale { accessor, divisor } => {
                numeric(accessor, record, |v| round2(v / divisor))
            }
            Self::Power { accessor, exponent } => {
                numeric(accessor, record, |v| round2(v.powf(*exponent)))
            }
            Self::Chain { accessor, ops } => numeric(accessor, record, |v| {
                round2(ops.iter().fold(v, |acc, op| op.apply(acc)))
            }),
            Self::Report { template } => render_template(template, record).map(Value::Utf8),
            Self::Threshold {
                accessor,
                cutoff,
                above,
                below,
            } => {
                let label = match accessor.number(record)? {
                    Some(v) if v > *cutoff => above,
                    _ => below,
                };
                Ok(Value::Utf8(label.clone()))
            }
        }
    }
}

fn numeric(
    accessor: &FieldAccessor,
    record: &Record,
    f: impl Fn(f64) -> f64,
) -> QueryResult<Value> {
    Ok(match accessor.number(record)? {
        Some(v) => Value::Float64(f(v)),
        None => Value::Absent,
    })
}

fn render_template(template: &str, record: &Record) -> QueryResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let field = &after[..close];
                out.push_str(&record.get(field)?.to_string());
                rest = &after[close + 1..];
            }
            None => {
                // Unterminated placeholder; emit the remainder literally.
                out.push_str(&rest[open..]);
                return Ok(out);
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
