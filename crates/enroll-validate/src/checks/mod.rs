//! Validation check modules.
//!
//! Each module evaluates one family of rules and returns report fragments.

pub mod category;
pub mod duplicate;
pub mod term;
