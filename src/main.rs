//! termtint - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use termtint::cli::{Cli, Commands};
use termtint::terminal::ColorMode;
use termtint::Config;

/// Environment variable holding the log filter, e.g. `TERMTINT_LOG=debug`.
const LOG_ENV: &str = "TERMTINT_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file and apply the --color override.
fn load_config(path: Option<&Path>, color: Option<ColorMode>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(color) = color {
        config.color = color;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Paint { style, text } => {
            let config = load_config(config_path, cli.color)?;
            commands::paint::handle(&config, &style, &text)
        }
        Commands::Strip => commands::strip::handle(),
        Commands::Codes { style } => commands::codes::handle(&style),
        Commands::Roles => {
            let config = load_config(config_path, cli.color)?;
            commands::roles::handle(&config)
        }
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
