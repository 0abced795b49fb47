//! Fold-based aggregation over a [`RecordStore`].
//!
//! [`fold`] is the single reduce primitive: it walks the store left to right,
//! threading an accumulator seeded at an explicit identity. Every built-in
//! summary below is expressed through it.
//!
//! Absent handling: numeric aggregates skip [`crate::types::Value::Absent`]
//! cells entirely. In particular [`max_by`]/[`min_by`] carry no zero sentinel —
//! a store whose field is absent in every record yields `None` rather than a
//! fabricated maximum of 0.

use crate::error::{QueryError, QueryResult};
use crate::query::accessor::FieldAccessor;
use crate::query::predicate::Predicate;
use crate::types::{Record, RecordStore};

/// Fold all records into an accumulator, left to right.
///
/// This is similar to `Iterator::fold`, but provides each row as a [`Record`].
pub fn fold<'a, A, F>(store: &'a RecordStore, init: A, mut combine: F) -> A
where
    F: FnMut(A, &'a Record) -> A,
{
    store.iter().fold(init, |acc, record| combine(acc, record))
}

/// Sum a numeric field. Identity is 0; absent cells contribute nothing.
pub fn sum(store: &RecordStore, field: &str) -> QueryResult<f64> {
    let accessor = FieldAccessor::new(field);
    fold(store, Ok(0.0), |total, record| {
        let total = total?;
        Ok(match accessor.number(record)? {
            Some(v) => total + v,
            None => total,
        })
    })
}

/// Average of a numeric field: the field sum divided by the store length.
///
/// Fails with [`QueryError::EmptyStore`] on zero records. The result is not
/// rounded; callers round for display.
pub fn average(store: &RecordStore, field: &str) -> QueryResult<f64> {
    if store.is_empty() {
        return Err(QueryError::EmptyStore {
            operation: "average",
        });
    }
    Ok(sum(store, field)? / store.len() as f64)
}

/// The record with the largest value in `field`, skipping absent cells.
///
/// Ties keep the earlier (first-seen) record. `None` if the store is empty or
/// the field is absent in every record.
pub fn max_by<'a>(store: &'a RecordStore, field: &str) -> QueryResult<Option<&'a Record>> {
    extreme_by(store, field, |candidate, best| candidate > best)
}

/// The record with the smallest value in `field`, skipping absent cells.
///
/// Ties keep the earlier (first-seen) record.
pub fn min_by<'a>(store: &'a RecordStore, field: &str) -> QueryResult<Option<&'a Record>> {
    extreme_by(store, field, |candidate, best| candidate < best)
}

fn extreme_by<'a>(
    store: &'a RecordStore,
    field: &str,
    beats: impl Fn(f64, f64) -> bool,
) -> QueryResult<Option<&'a Record>> {
    let accessor = FieldAccessor::new(field);
    let best = fold(
        store,
        Ok(None::<(&'a Record, f64)>),
        |best: QueryResult<Option<(&'a Record, f64)>>, record| {
            let best = best?;
            Ok(match accessor.number(record)? {
                None => best,
                Some(v) => match best {
                    // Strict comparison keeps the first-seen record on ties.
                    Some((_, current)) if !beats(v, current) => best,
                    _ => Some((record, v)),
                },
            })
        },
    )?;
    Ok(best.map(|(record, _)| record))
}

/// Count records matching a predicate. Identity is 0; each match adds 1.
pub fn count_matching(store: &RecordStore, predicate: &Predicate) -> QueryResult<usize> {
    fold(store, Ok(0usize), |count, record| {
        let count = count?;
        Ok(if predicate.matches(record)? {
            count + 1
        } else {
            count
        })
    })
}

/// Join a field's display values with `separator`, in store order.
///
/// Identity is the empty sequence; absent cells render as `NaN`.
pub fn join(store: &RecordStore, field: &str, separator: &str) -> QueryResult<String> {
    let accessor = FieldAccessor::new(field);
    let parts = fold(store, Ok(Vec::new()), |parts, record| {
        let mut parts: Vec<String> = parts?;
        parts.push(accessor.value(record)?.to_string());
        Ok(parts)
    })?;
    Ok(parts.join(separator))
}
