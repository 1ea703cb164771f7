//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use vitrina_core::config::{Config, Theme, paths};
use vitrina_core::logging;
use vitrina_core::showcase::ShowSpec;

mod commands;

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(version)]
#[command(about = "A landing page in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show file (TOML) overriding the built-in show
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Theme for this run, not persisted (light, dark)
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the showcase headlessly, printing to stdout
    Play {
        /// Emit events as JSON lines instead of rendered text
        #[arg(long)]
        json: bool,

        /// Collapse every delay to one millisecond
        #[arg(long)]
        quick: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config-free commands first; they must not touch the home directory
    // beyond what they print or create.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = Config::load().context("load config")?;
    let theme = resolve_theme(cli.theme.as_deref(), config.theme)?;
    let show = resolve_show(cli.script.as_deref(), config.script_file.as_deref())?;

    // Logs go to a file; stdout and the alternate screen stay clean.
    let _guard = logging::init(&paths::logs_dir()).context("init logging")?;
    tracing::debug!(theme = theme.display_name(), "vitrina starting");

    match cli.command {
        None => run_showcase(show, theme).await,
        Some(Commands::Play { json, quick }) => {
            commands::play::run(&show, commands::play::PlayOptions { json, quick }).await
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}

#[cfg(feature = "tui")]
async fn run_showcase(show: ShowSpec, theme: Theme) -> Result<()> {
    vitrina_tui::run_showcase(show, theme).await
}

#[cfg(not(feature = "tui"))]
async fn run_showcase(_show: ShowSpec, _theme: Theme) -> Result<()> {
    bail!("this build has no TUI; use `vitrina play`")
}

fn resolve_theme(flag: Option<&str>, configured: Theme) -> Result<Theme> {
    match flag {
        None => Ok(configured),
        Some("light") => Ok(Theme::Light),
        Some("dark") => Ok(Theme::Dark),
        Some(other) => bail!("unknown theme '{other}' (expected 'light' or 'dark')"),
    }
}

/// Show precedence: `--script` flag, then `script_file` from config, then
/// the built-in show.
fn resolve_show(flag: Option<&Path>, configured: Option<&str>) -> Result<ShowSpec> {
    match (flag, configured) {
        (Some(path), _) => ShowSpec::load_from(path),
        (None, Some(path)) => ShowSpec::load_from(Path::new(path)),
        (None, None) => Ok(ShowSpec::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme_flag_overrides_config() {
        assert_eq!(resolve_theme(Some("light"), Theme::Dark).unwrap(), Theme::Light);
        assert_eq!(resolve_theme(None, Theme::Dark).unwrap(), Theme::Dark);
        assert!(resolve_theme(Some("sepia"), Theme::Dark).is_err());
    }
}
