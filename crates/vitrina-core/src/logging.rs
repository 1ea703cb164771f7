//! File logging setup.
//!
//! The TUI owns the terminal, so logs go to a file under the vitrina home
//! directory instead of stderr. Filtering follows RUST_LOG when set.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with a daily-rolling file
/// appender.
///
/// Returns the worker guard; dropping it flushes buffered log lines, so the
/// caller must keep it alive for the lifetime of the process.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "vitrina.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second call (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_creates_log_dir() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let _guard = init(&log_dir).unwrap();

        assert!(log_dir.exists());
    }
}
