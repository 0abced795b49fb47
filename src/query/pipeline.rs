//! Filter → transform pipelines.
//!
//! A [`Pipeline`] glues an optional [`Predicate`] and an optional [`Transform`]
//! into a single run over a [`RecordStore`]. Omitted stages are no-ops: with no
//! transform the output is a filtered store (original relative order preserved),
//! with a transform it is one [`Value`] per surviving record.

use crate::error::QueryResult;
use crate::query::predicate::Predicate;
use crate::query::transform::Transform;
use crate::types::{RecordStore, Value};

/// An ordered filter → transform pipeline.
///
/// Pipelines borrow nothing from any store: build one once and run it against
/// the same (or different) stores as often as needed.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    predicate: Option<Predicate>,
    transform: Option<Transform>,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutput {
    /// Filtered records (no transform stage configured).
    Records(RecordStore),
    /// Transformed values, one per surviving record.
    Values(Vec<Value>),
}

impl PipelineOutput {
    /// Number of records or values produced.
    pub fn len(&self) -> usize {
        match self {
            Self::Records(store) => store.len(),
            Self::Values(values) => values.len(),
        }
    }

    /// Whether the run produced nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The filtered store, if the pipeline had no transform stage.
    pub fn into_records(self) -> Option<RecordStore> {
        match self {
            Self::Records(store) => Some(store),
            Self::Values(_) => None,
        }
    }

    /// The transformed values, if the pipeline had a transform stage.
    pub fn into_values(self) -> Option<Vec<Value>> {
        match self {
            Self::Records(_) => None,
            Self::Values(values) => Some(values),
        }
    }
}

impl Pipeline {
    /// An empty pipeline (both stages no-ops).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter stage.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Set the transform stage.
    pub fn map(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Run the pipeline over a store.
    pub fn run(&self, store: &RecordStore) -> QueryResult<PipelineOutput> {
        let filtered = self.records(store)?;
        match &self.transform {
            None => Ok(PipelineOutput::Records(filtered)),
            Some(transform) => {
                let mut values = Vec::with_capacity(filtered.len());
                for record in &filtered {
                    values.push(transform.apply(record)?);
                }
                Ok(PipelineOutput::Values(values))
            }
        }
    }

    /// Apply only the filter stage, returning a store in original relative order.
    pub fn records(&self, store: &RecordStore) -> QueryResult<RecordStore> {
        match &self.predicate {
            None => Ok(store.clone()),
            Some(predicate) => {
                let mut kept = Vec::new();
                for record in store {
                    if predicate.matches(record)? {
                        kept.push(record.clone());
                    }
                }
                Ok(RecordStore::from_records(store.schema_arc(), kept))
            }
        }
    }

    /// Number of records surviving the filter stage.
    pub fn count(&self, store: &RecordStore) -> QueryResult<usize> {
        Ok(self.records(store)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pipeline, PipelineOutput};
    use crate::query::predicate::Predicate;
    use crate::query::transform::Transform;
    use crate::types::{DataType, Field, RecordStore, Schema, Value};

    fn plating_store() -> RecordStore {
        let schema = Schema::new(vec![
            Field::new("Batch ID", DataType::Utf8),
            Field::new("Plating Type", DataType::Utf8),
            Field::new("pH Level", DataType::Float64),
        ]);
        RecordStore::new(
            schema,
            vec![
                vec![
                    Value::from("ELP5726"),
                    Value::from("Electroless Nickel"),
                    Value::Float64(4.8),
                ],
                vec![
                    Value::from("ELP8081"),
                    Value::from("Electroless Copper"),
                    Value::Float64(5.2),
                ],
                vec![
                    Value::from("ELP1234"),
                    Value::from("Electroless Copper"),
                    Value::Float64(5.6),
                ],
                vec![
                    Value::from("ELP4567"),
                    Value::from("Electroless Nickel"),
                    Value::Float64(5.1),
                ],
            ],
        )
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let store = plating_store();
        let out = Pipeline::new().run(&store).unwrap();
        assert_eq!(out, PipelineOutput::Records(store));
    }

    #[test]
    fn filter_keeps_matching_records_in_order() {
        let store = plating_store();
        let copper = Pipeline::new().filter(Predicate::field_equals(
            "Plating Type",
            "Electroless Copper",
        ));

        let out = copper.records(&store).unwrap();
        assert!(out.len() <= store.len());
        assert_eq!(out.len(), 2);
        assert_eq!(out.get(0).unwrap().text("Batch ID").unwrap(), Some("ELP8081"));
        assert_eq!(out.get(1).unwrap().text("Batch ID").unwrap(), Some("ELP1234"));
        for record in &out {
            assert_eq!(
                record.text("Plating Type").unwrap(),
                Some("Electroless Copper")
            );
        }
    }

    #[test]
    fn filter_then_map_produces_values() {
        let store = plating_store();
        // Copper batches with pH > 5, projected to their batch ids.
        let out = Pipeline::new()
            .filter(Predicate::all(vec![
                Predicate::field_equals("Plating Type", "Electroless Copper"),
                Predicate::field_above("pH Level", 5.0),
            ]))
            .map(Transform::report("{Batch ID}"))
            .run(&store)
            .unwrap();

        assert_eq!(
            out.into_values().unwrap(),
            vec![
                Value::Utf8("ELP8081".to_string()),
                Value::Utf8("ELP1234".to_string()),
            ]
        );
    }

    #[test]
    fn map_without_filter_transforms_every_record() {
        let store = plating_store();
        let out = Pipeline::new()
            .map(Transform::threshold("pH Level", 5.0, "HIGH", "LOW"))
            .run(&store)
            .unwrap();
        assert_eq!(out.len(), store.len());
        assert_eq!(
            out.into_values().unwrap(),
            vec![
                Value::Utf8("LOW".to_string()),
                Value::Utf8("HIGH".to_string()),
                Value::Utf8("HIGH".to_string()),
                Value::Utf8("HIGH".to_string()),
            ]
        );
    }

    #[test]
    fn count_reports_surviving_records() {
        let store = plating_store();
        let nickel = Pipeline::new().filter(Predicate::field_equals(
            "Plating Type",
            "Electroless Nickel",
        ));
        assert_eq!(nickel.count(&store).unwrap(), 2);
    }

    #[test]
    fn pipelines_are_reusable_across_stores() {
        let store = plating_store();
        let preview = store.head(2);
        let acidic = Pipeline::new().filter(Predicate::field_below("pH Level", 5.0));
        assert_eq!(acidic.count(&store).unwrap(), 1);
        assert_eq!(acidic.count(&preview).unwrap(), 1);
    }
}
