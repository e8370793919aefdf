//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::loader::LoadConfig;

/// Environment variable naming the station roster.
pub const STATIONS_CSV_VAR: &str = "RAIL_STATIONS_CSV";
/// Environment variable naming the connection roster.
pub const CONNECTIONS_CSV_VAR: &str = "RAIL_CONNECTIONS_CSV";
/// Environment variable overriding the "no neighbor" marker.
pub const NO_NEIGHBOR_VAR: &str = "RAIL_NO_NEIGHBOR";
/// Environment variable with the listen address.
pub const BIND_ADDR_VAR: &str = "RAIL_BIND_ADDR";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Error for an environment value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub load: LoadConfig,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`; unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LoadConfig::default();

        let mut load = LoadConfig::new(
            lookup(STATIONS_CSV_VAR).map_or(defaults.stations_path, PathBuf::from),
            lookup(CONNECTIONS_CSV_VAR).map_or(defaults.connections_path, PathBuf::from),
        );
        if let Some(marker) = lookup(NO_NEIGHBOR_VAR) {
            load = load.with_no_neighbor(marker);
        }

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        Ok(Self { load, bind_addr })
    }
}
