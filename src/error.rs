use thiserror::Error;

/// Convenience result type for query-layer operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned by the query toolkit (accessors, builders, aggregates,
/// pipelines).
///
/// Builder misconfiguration (`UnsupportedOperator`, `DivisionByZero`) is surfaced
/// at construction time so that a bad predicate or transform never makes it into a
/// pipeline. Absent/NaN measurements are *not* errors; see
/// [`crate::types::Value::Absent`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Requested field is absent from the schema.
    #[error("field not found: '{field}'")]
    FieldNotFound { field: String },

    /// Predicate builder given an operator symbol outside `{==, !=, <, >, <=, >=}`.
    #[error("unsupported comparison operator '{symbol}'")]
    UnsupportedOperator { symbol: String },

    /// Scaling/dividing transform built with a zero divisor.
    #[error("division by zero: transform divisor must be non-zero")]
    DivisionByZero,

    /// An aggregate requiring a non-empty store was invoked on zero records.
    #[error("empty store: {operation} requires at least one record")]
    EmptyStore { operation: &'static str },
}

/// Convenience result type for store loading operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type returned by the one-time load layer (CSV source, JSON snapshot).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV source error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON snapshot error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not conform to the provided schema (missing required
    /// fields/columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
