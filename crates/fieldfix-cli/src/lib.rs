//! CLI library components for fieldfix.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
