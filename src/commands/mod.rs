//! CLI command handlers.

pub mod classify;
pub mod completions;
pub mod config;
