use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::StoreError;

use super::unified::SourceFormat;

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path used for loading.
    pub path: PathBuf,
    /// Format used for loading.
    pub format: SourceFormat,
}

/// Minimal stats reported on successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded records.
    pub records: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics or logs around the one-time store load. The
/// query toolkit itself performs no I/O, so this is the only observable seam.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _error: &StoreError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, error: &StoreError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] format={:?} path={} records={}",
            ctx.format,
            ctx.path.display(),
            stats.records
        );
    }

    fn on_failure(&self, ctx: &LoadContext, error: &StoreError) {
        eprintln!(
            "[load][err] format={:?} path={} err={}",
            ctx.format,
            ctx.path.display(),
            error
        );
    }
}
