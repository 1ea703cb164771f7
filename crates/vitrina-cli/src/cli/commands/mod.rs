//! Subcommand handlers.

pub mod config;
pub mod play;
