//! Core vitrina library (sequencing engines, show content, config).

pub mod config;
pub mod logging;
pub mod script;
pub mod showcase;
