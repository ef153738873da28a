//! anime-presenter CLI entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anime_presenter::cli::{Cli, Commands, ConfigCommands};
use anime_presenter::{Config, MarkupError};

/// Install a stderr subscriber when `--verbose` is set; otherwise logging
/// stays disabled. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("anime_presenter=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    tracing::debug!("Debug enabled");
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Show { markup_file } => {
            let config = load_config(&cli)?;
            commands::show::handle(markup_file, &config)
        }
        Commands::Outline { markup_file, json } => commands::outline::handle(markup_file, *json),
        Commands::Config(ConfigCommands::Show) => {
            let config = load_config(&cli)?;
            commands::config::handle_show(&config)
        }
        Commands::Config(ConfigCommands::Path) => {
            commands::config::handle_path(cli.config.as_deref())
        }
        Commands::Completions { shell } => commands::completions::handle(*shell),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(markup_err) = err.downcast_ref::<MarkupError>() {
                commands::print_error_panel("MarkupError", &markup_err.to_string());
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
