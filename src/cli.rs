//! Command-line interface definitions.
//!
//! Lives in the library so completions can be generated from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Slide-synchronized video presenter
#[derive(Debug, Parser)]
#[command(name = "anime-presenter", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Present a markup file in the terminal preview player
    Show {
        /// Presentation markup (YAML)
        markup_file: PathBuf,
    },

    /// Print the slide outline of a markup file
    Outline {
        /// Presentation markup (YAML)
        markup_file: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
