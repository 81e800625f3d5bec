use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::data::loader::LoaderOptions;
use crate::data::model::ColumnNames;

pub const HOST_VAR: &str = "ANIMAL_CALLS_HOST";
pub const PORT_VAR: &str = "ANIMAL_CALLS_PORT";
pub const CSV_VAR: &str = "ANIMAL_CALLS_CSV";
pub const DELIMITER_VAR: &str = "ANIMAL_CALLS_DELIMITER";
pub const COLUMNS_VAR: &str = "ANIMAL_CALLS_COLUMNS";

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Server configuration
// ---------------------------------------------------------------------------

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Explicit data file, probed before the default locations.
    pub csv_path: Option<PathBuf>,
    pub loader: LoaderOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            csv_path: None,
            loader: LoaderOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or blank
    /// keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| invalid(HOST_VAR, &host, "IP address"))?;
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| invalid(PORT_VAR, &port, "port number"))?;
        }
        config.csv_path = get(CSV_VAR).map(PathBuf::from);
        if let Some(delimiter) = get(DELIMITER_VAR) {
            config.loader.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(columns) = get(COLUMNS_VAR) {
            config.loader.columns = parse_columns(&columns)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn invalid(var: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    }
}

/// A single ASCII character; `\t` and `tab` both mean a tab.
fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    if matches!(value, "\\t" | "tab") {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(invalid(DELIMITER_VAR, value, "single ASCII delimiter")),
    }
}

/// Three comma-separated header names: animal, sound, call-for.
fn parse_columns(value: &str) -> Result<ColumnNames, ConfigError> {
    let names: Vec<&str> = value.split(',').map(str::trim).collect();
    match names.as_slice() {
        [animal, sound, call_for] if names.iter().all(|n| !n.is_empty()) => Ok(ColumnNames {
            animal: animal.to_string(),
            sound: sound.to_string(),
            call_for: call_for.to_string(),
        }),
        _ => Err(invalid(COLUMNS_VAR, value, "list of three column names")),
    }
}
