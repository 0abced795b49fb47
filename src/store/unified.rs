//! Unified load entrypoint.
//!
//! Most callers should use [`load_from_path`], which loads a tabular source into an
//! in-memory [`crate::types::RecordStore`] using a provided [`crate::types::Schema`].
//!
//! - If [`LoadOptions::format`] is `None`, the source format is inferred from the
//!   file extension (`.csv` for CSV sources, `.json` for snapshot documents).
//! - If a [`LoadObserver`] is provided, success/failure is reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::types::{RecordStore, Schema};

use super::observability::{LoadContext, LoadObserver, LoadStats};
use super::{csv, snapshot};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON snapshot document (see [`super::snapshot`]).
    Snapshot,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Snapshot),
            _ => None,
        }
    }
}

/// Options controlling unified load behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<SourceFormat>,
    /// Optional observer for load logging.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Unified load entry point for path-based sources.
///
/// - If `options.format` is `None`, format is inferred from the file extension.
/// - CSV sources are validated against `schema`; snapshot documents carry their
///   own schema and `schema` must match it.
///
/// When an observer is configured, `on_success` / `on_failure` is reported with
/// the resolved format and path.
pub fn load_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &LoadOptions,
) -> StoreResult<RecordStore> {
    let path = path.as_ref();

    let format = match options.format {
        Some(f) => f,
        None => detect_format(path)?,
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        SourceFormat::Csv => csv::load_csv_from_path(path, schema),
        SourceFormat::Snapshot => snapshot::load_snapshot(path).and_then(|store| {
            if store.schema() == schema {
                Ok(store)
            } else {
                Err(StoreError::SchemaMismatch {
                    message: format!(
                        "snapshot schema does not match requested schema (snapshot fields: {:?})",
                        store.schema().field_names().collect::<Vec<_>>()
                    ),
                })
            }
        }),
    };

    if let Some(observer) = &options.observer {
        match &result {
            Ok(store) => observer.on_success(
                &ctx,
                LoadStats {
                    records: store.len(),
                },
            ),
            Err(error) => observer.on_failure(&ctx, error),
        }
    }

    result
}

fn detect_format(path: &Path) -> StoreResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    SourceFormat::from_extension(ext).ok_or_else(|| StoreError::SchemaMismatch {
        message: format!(
            "cannot detect source format from path '{}' (expected .csv or .json)",
            path.display()
        ),
    })
}
