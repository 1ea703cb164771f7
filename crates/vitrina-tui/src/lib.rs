//! Full-screen TUI implementation for vitrina.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use vitrina_core::config::Theme;
use vitrina_core::showcase::ShowSpec;

/// Runs the interactive showcase.
pub async fn run_showcase(show: ShowSpec, theme: Theme) -> Result<()> {
    // The showcase requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The showcase requires a terminal.\n\
             Use `vitrina play` for non-interactive output."
        );
    }

    show.validate()?;

    let mut runtime = TuiRuntime::new(show, theme)?;
    runtime.run()?;

    Ok(())
}
