//! One-time store loading.
//!
//! Loading happens once, before any pipeline runs; the resulting
//! [`crate::types::RecordStore`] is read-only for the rest of the process.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - auto-detects the source format by file extension (or you can override via
//!   [`LoadOptions`])
//! - loads into an in-memory [`crate::types::RecordStore`]
//! - optionally reports success/failure to a [`LoadObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]: CSV source with headers
//! - [`snapshot`]: flat JSON copy of a loaded store (save + load)

pub mod csv;
pub mod observability;
pub mod snapshot;
pub mod unified;

pub use observability::{CompositeObserver, LoadContext, LoadObserver, LoadStats, StdErrObserver};
pub use snapshot::{load_snapshot, save_snapshot};
pub use unified::{load_from_path, LoadOptions, SourceFormat};
