//! `record-query` is a small library for loading a uniform-schema tabular source
//! into an immutable in-memory [`types::RecordStore`] and querying it with
//! reusable, pure building blocks: field accessors, predicate builders, transform
//! builders, fold-based aggregates, and filter → transform pipelines.
//!
//! The data model is deliberately simple: a [`types::Schema`] of typed
//! [`types::Field`]s, and records whose cells are [`types::Value`]s —
//! `Float64`, `Utf8`, or the explicit [`types::Value::Absent`] marker for
//! missing measurements (never silently coerced to zero).
//!
//! ## Loading
//!
//! A store is loaded exactly once, before any query runs, and is read-only
//! thereafter. The primary entrypoint is [`store::load_from_path`], which
//! auto-detects the source format from the file extension:
//!
//! - **CSV** (`.csv`): a headered tabular source validated against your schema
//! - **Snapshot** (`.json`): a flat serialized copy of a previously loaded store
//!
//! ```no_run
//! use record_query::store::{load_from_path, save_snapshot, LoadOptions};
//! use record_query::types::{DataType, Field, Schema};
//!
//! # fn main() -> Result<(), record_query::StoreError> {
//! let schema = Schema::new(vec![
//!     Field::new("Batch ID", DataType::Utf8),
//!     Field::new("Bath Temperature (°C)", DataType::Float64),
//!     Field::new("Pass/Fail", DataType::Utf8),
//! ]);
//! let store = load_from_path("plating.csv", &schema, &LoadOptions::default())?;
//! // One-shot conversion: persist the loaded store for later runs.
//! save_snapshot(&store, "plating.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Querying
//!
//! Every query-layer value is a configuration object exposing a single apply
//! capability, so it can be built once, validated at build time, and reused
//! across any number of runs:
//!
//! ```rust
//! use record_query::query::{aggregate, Pipeline, Predicate, Transform};
//! use record_query::types::{DataType, Field, RecordStore, Schema, Value};
//!
//! # fn main() -> Result<(), record_query::QueryError> {
//! let schema = Schema::new(vec![
//!     Field::new("Batch ID", DataType::Utf8),
//!     Field::new("Bath Temperature (°C)", DataType::Float64),
//! ]);
//! let store = RecordStore::new(
//!     schema,
//!     vec![
//!         vec![Value::from("ELP5726"), Value::Float64(89.4)],
//!         vec![Value::from("ELP8081"), Value::Float64(92.1)],
//!     ],
//! );
//!
//! // Predicates fail fast: an unknown operator symbol errors at build time.
//! let hot = Predicate::compare("Bath Temperature (°C)", ">", 90.0)?;
//! let hot_count = aggregate::count_matching(&store, &hot)?;
//! assert_eq!(hot_count, 1);
//!
//! // Transforms are pure Record -> Value functions.
//! let halved = Pipeline::new()
//!     .map(Transform::scale("Bath Temperature (°C)", 2.0)?)
//!     .run(&store)?
//!     .into_values()
//!     .unwrap();
//! assert_eq!(halved[0], Value::Float64(44.7));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`store`]: one-time load (CSV source, JSON snapshot) with optional load
//!   observers
//! - [`types`]: schema + record + store types
//! - [`query`]: accessors, predicates, transforms, aggregates, pipelines
//! - [`error`]: error types for loading and querying
//!
//! ## Semantics worth knowing
//!
//! - **Absent values** are skipped by numeric aggregates; [`query::aggregate::max_by`]
//!   over an all-absent field yields `None`, not 0.
//! - **Rounding** in transforms is round-half-away-from-zero to 2 decimal places
//!   ([`query::transform::round2`]).
//! - **Composition order**: [`query::transform::compose`] is `f(g(x))`;
//!   [`query::transform::compose_all`] applies its list left to right.
//! - **Ties** in [`query::aggregate::max_by`]/[`query::aggregate::min_by`] keep
//!   the earlier record.

pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use error::{QueryError, QueryResult, StoreError, StoreResult};
