//! # Config Command
//!
//! Prints the effective venue API configuration.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use dopc_venue::VenueApiConfig;
use tracing::debug;

/// Loads defaults, file and environment, then prints the result as TOML.
pub fn run(config_path: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    debug!(?config_path, "config command");

    let config = VenueApiConfig::load(config_path).context("failed to load configuration")?;
    let rendered = config.to_toml().context("failed to render configuration")?;

    if let Some(path) = VenueApiConfig::default_config_path() {
        println!("# default config file: {}", path.display());
    }
    print!("{rendered}");

    Ok(ExitCode::SUCCESS)
}
