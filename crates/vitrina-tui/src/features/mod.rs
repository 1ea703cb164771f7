//! Feature modules: state + event application + rendering per panel.

pub mod chat;
pub mod demo;
pub mod hero;
