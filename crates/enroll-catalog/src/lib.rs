//! Course catalog: loading the flat course list and indexing it by
//! year/semester and group.
//!
//! Loading is tolerant: malformed rows are skipped with a [`CatalogWarning`].
//! Indexing always succeeds, even for an empty catalog, in which case every
//! term is simply empty.

mod error;
mod index;
mod loader;
mod order;

pub use error::{CatalogError, Result};
pub use index::{CatalogIndex, CourseGroup, TermCatalog};
pub use loader::{CatalogWarning, LoadedCatalog, load_catalog, parse_catalog_csv, parse_catalog_json};
pub use order::natural_cmp;
