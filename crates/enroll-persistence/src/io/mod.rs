//! Snapshot file I/O.

mod load;
mod save;

pub use load::load_snapshot;
pub use save::save_snapshot;

/// Snapshot file name used when no path is configured.
pub const DEFAULT_SNAPSHOT_FILE: &str = "courseSelectionsApp_Y2Y3.json";
