//! Server configuration

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::settings::ClientSettings;

/// Names an explicit config file; otherwise `riviera.toml` (or any other
/// format `config` understands) in the working directory is used if present.
pub const CONFIG_FILE_ENV: &str = "RIVIERA_CONFIG";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Backend location and refresh intervals
    #[serde(default)]
    pub client: ClientSettings,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

pub fn load_config() -> Result<Config> {
    match std::env::var(CONFIG_FILE_ENV) {
        Ok(path) if !path.is_empty() => load_from(Some(Path::new(&path))),
        _ => load_from(None),
    }
}

/// Defaults, then the file, then `RIVIERA_*` environment variables
/// (`RIVIERA_PORT`, `RIVIERA_CLIENT__API_BASE_URL`, ...).
pub fn load_from(file: Option<&Path>) -> Result<Config> {
    let file_source = match file {
        Some(path) => ::config::File::from(path).required(true),
        None => ::config::File::with_name("riviera").required(false),
    };

    let config = ::config::Config::builder()
        .set_default("host", default_host())?
        .set_default("port", default_port())?
        .add_source(file_source)
        .add_source(
            ::config::Environment::with_prefix("RIVIERA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
