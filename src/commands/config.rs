//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use anime_presenter::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file location, whether or not it exists yet.
pub fn handle_path(override_path: Option<&Path>) -> Result<()> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
