//! Durable storage for the selection snapshot.
//!
//! The snapshot is a single JSON document:
//!
//! ```text
//! {"selectedCourseIds": [...], "studentName": "...", "studentIdNumber": "..."}
//! ```
//!
//! Writes go through a temp file and a rename so a crash never leaves a
//! half-written snapshot behind. Loading degrades to the empty snapshot when
//! the file is absent or unreadable; see [`load_or_default`].

mod error;
mod io;
mod store;

pub use error::{PersistenceError, Result};
pub use io::{DEFAULT_SNAPSHOT_FILE, load_snapshot, save_snapshot};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, load_or_default};
