//! Registration rule engine.
//!
//! [`evaluate`] is a pure function of the catalog index, the selection and
//! the [`RuleSet`]. It checks, for each of the four terms, that every
//! non-mandatory group's selected count equals its quota and that selected
//! hours equal the term's requirement; then, across terms, the duplicate-name
//! rule and the two special-category count rules.

pub mod checks;
mod engine;
mod gate;
mod rules;

pub use engine::evaluate;
pub use gate::{ExportGate, gate_export};
pub use rules::{
    CategoryRule, DEFAULT_REQUIRED_HOURS, GatePolicy, Result, RuleSet, RuleSetError,
};
