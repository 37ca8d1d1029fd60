//! CLI library components for the course registration validator.

pub mod commands;
pub mod logging;
