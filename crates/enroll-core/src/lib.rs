//! Registration session.
//!
//! A [`Session`] owns the catalog index, the current selection and the rule
//! set. Every change goes through [`Session::apply_selection_change`] or
//! [`Session::apply_identity_change`], which mutate the selection, persist
//! the new snapshot and return a freshly evaluated report.

mod change;
mod session;

pub use change::{ChangeStatus, IdentityChange, SelectionChange, SessionUpdate};
pub use session::Session;
