//! The record-query toolkit.
//!
//! Everything in this module is a pure, reusable function over records from an
//! immutable [`crate::types::RecordStore`]:
//!
//! - [`accessor`]: field access with an explicit absent-value policy
//! - [`predicate`]: `Record -> bool` builders, validated at construction
//! - [`transform`]: `Record -> Value` builders plus function composition
//! - [`aggregate`]: the fold primitive and the summaries built on it
//! - [`pipeline`]: filter → transform runs over a store
//!
//! ## Example: filter → transform → aggregate
//!
//! ```rust
//! use record_query::query::aggregate;
//! use record_query::query::pipeline::Pipeline;
//! use record_query::query::predicate::Predicate;
//! use record_query::query::transform::Transform;
//! use record_query::types::{DataType, Field, RecordStore, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("Batch ID", DataType::Utf8),
//!     Field::new("Pass/Fail", DataType::Utf8),
//!     Field::new("Plating Time (min)", DataType::Float64),
//! ]);
//! let store = RecordStore::new(
//!     schema,
//!     vec![
//!         vec![Value::from("ELP5726"), Value::from("Pass"), Value::Float64(10.0)],
//!         vec![Value::from("ELP8081"), Value::from("Fail"), Value::Float64(20.0)],
//!         vec![Value::from("ELP1234"), Value::from("Pass"), Value::Float64(30.0)],
//!     ],
//! );
//!
//! // Keep passing batches, then total their plating time.
//! let passed = Pipeline::new()
//!     .filter(Predicate::field_equals("Pass/Fail", "Pass"))
//!     .records(&store)
//!     .unwrap();
//! assert_eq!(aggregate::sum(&passed, "Plating Time (min)").unwrap(), 40.0);
//!
//! // Or project a per-batch summary string.
//! let summaries = Pipeline::new()
//!     .map(Transform::report("Batch {Batch ID}: {Plating Time (min)} min"))
//!     .run(&store)
//!     .unwrap()
//!     .into_values()
//!     .unwrap();
//! assert_eq!(summaries[0], Value::Utf8("Batch ELP5726: 10 min".to_string()));
//! ```

pub mod accessor;
pub mod aggregate;
pub mod pipeline;
pub mod predicate;
pub mod transform;

pub use accessor::FieldAccessor;
pub use aggregate::fold;
pub use pipeline::{Pipeline, PipelineOutput};
pub use predicate::{CmpOp, Predicate};
pub use transform::{compose, compose_all, round2, NumericOp, Transform};
