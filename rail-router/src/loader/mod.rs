//! Loading the network from its CSV rosters.
//!
//! The station roster gives every station's code and coordinates; the
//! connection roster lists each station's neighbors in fixed slots.
//! [`load_network`] reads both, builds the [`Network`] and returns it with
//! the set of codes the station roster declares.

mod config;
mod error;
mod roster;

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::domain::StationCode;
use crate::network::{Network, build_network};
use crate::validate::{ValidationReport, validate};

pub use config::{DEFAULT_NO_NEIGHBOR, LoadConfig};
pub use error::LoadError;
pub use roster::{parse_connection_rows, parse_station_rows};

/// A network together with the authoritative roster it was built from.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub network: Network,
    /// Every code listed in the station roster.
    pub known_codes: HashSet<StationCode>,
}

impl LoadedNetwork {
    /// Run the validator against the roster this network came from.
    pub fn validate(&self) -> ValidationReport {
        validate(&self.network, &self.known_codes)
    }
}

/// Read both rosters and build the network.
///
/// Any I/O, CSV or construction error aborts the load.
pub fn load_network(config: &LoadConfig) -> Result<LoadedNetwork, LoadError> {
    let stations = parse_station_rows(
        open(&config.stations_path)?,
        &config.stations_path.display().to_string(),
        config,
    )?;
    let connections = parse_connection_rows(
        open(&config.connections_path)?,
        &config.connections_path.display().to_string(),
        config,
    )?;

    let network = build_network(&stations, &connections)?;
    let known_codes = stations.iter().map(|row| row.code).collect();

    info!(
        stations = network.len(),
        edges = network.edge_count(),
        "Loaded network"
    );

    Ok(LoadedNetwork {
        network,
        known_codes,
    })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
