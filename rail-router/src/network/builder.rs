//! Network construction from roster rows.

use tracing::{debug, warn};

use crate::domain::{Coordinate, StationCode, distance_miles};

use super::error::NetworkError;
use super::graph::Network;

/// One row of the station roster.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub code: StationCode,
    pub coords: Coordinate,
}

impl StationRow {
    pub fn new(code: StationCode, coords: Coordinate) -> Self {
        Self { code, coords }
    }
}

/// One row of the connection roster.
///
/// `neighbors` holds the row's slots in column order; `None` is the
/// "no neighbor" sentinel. `unscanned` keeps the raw text of slots a reader
/// never parsed because they came after a gap; it is only reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRow {
    pub code: StationCode,
    pub neighbors: Vec<Option<StationCode>>,
    pub unscanned: Vec<String>,
}

impl ConnectionRow {
    pub fn new(code: StationCode, neighbors: Vec<Option<StationCode>>) -> Self {
        Self {
            code,
            neighbors,
            unscanned: Vec::new(),
        }
    }

    /// Attach slot text that followed the first gap.
    pub fn with_unscanned(mut self, unscanned: Vec<String>) -> Self {
        self.unscanned = unscanned;
        self
    }
}

/// Build a network from the two rosters.
///
/// Every station row is added first, then each connection row adds one
/// directed edge per slot, weighted with the great-circle distance between
/// the two stations. Scanning a row stops at its first empty slot: any
/// neighbor listed after a gap is dropped (and logged), never added.
///
/// Fails on a repeated station code, on a connection naming a station the
/// roster does not contain, and on an edge whose distance is not positive
/// (two stations at the same coordinates).
pub fn build_network(
    station_rows: &[StationRow],
    connection_rows: &[ConnectionRow],
) -> Result<Network, NetworkError> {
    let mut builder = NetworkBuilder::new();

    for row in station_rows {
        builder.add_station(row.code, row.coords)?;
    }

    for row in connection_rows {
        let from = builder.coords_of(&row.code)?;

        let mut slots = row.neighbors.iter();
        for slot in slots.by_ref() {
            let Some(neighbor) = slot else {
                break;
            };
            let to = builder.coords_of(neighbor)?;
            builder.add_connection(row.code, *neighbor, distance_miles(from, to))?;
        }

        let dropped: Vec<&str> = slots
            .flatten()
            .map(StationCode::as_str)
            .chain(row.unscanned.iter().map(String::as_str))
            .collect();
        if !dropped.is_empty() {
            warn!(
                station = %row.code,
                dropped = ?dropped,
                "Neighbors listed after an empty slot are ignored"
            );
        }
    }

    let network = builder.build();
    debug!(
        stations = network.len(),
        edges = network.edge_count(),
        "Network built"
    );
    Ok(network)
}

/// Incremental network construction with explicit edge weights.
///
/// [`build_network`] drives this from roster rows; it is also the way to
/// assemble small synthetic networks.
///
/// ```
/// use rail_router::domain::{Coordinate, StationCode};
/// use rail_router::network::NetworkBuilder;
///
/// let chi = StationCode::parse("CHI").unwrap();
/// let mil = StationCode::parse("MKE").unwrap();
///
/// let mut builder = NetworkBuilder::new();
/// builder
///     .add_station(chi, Coordinate::new(41.88, -87.64))?
///     .add_station(mil, Coordinate::new(43.03, -87.91))?
///     .add_connection(chi, mil, 80.0)?
///     .add_connection(mil, chi, 80.0)?;
/// let network = builder.build();
///
/// assert_eq!(network.edge_count(), 2);
/// # Ok::<(), rail_router::network::NetworkError>(())
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no connections.
    pub fn add_station(
        &mut self,
        code: StationCode,
        coords: Coordinate,
    ) -> Result<&mut Self, NetworkError> {
        self.network.add_station(code, coords)?;
        Ok(self)
    }

    /// Add a directed edge `from -> to`. The reverse edge is not implied.
    pub fn add_connection(
        &mut self,
        from: StationCode,
        to: StationCode,
        weight: f64,
    ) -> Result<&mut Self, NetworkError> {
        self.network.add_connection(from, to, weight)?;
        Ok(self)
    }

    /// Finish construction. The network cannot be changed afterwards.
    pub fn build(self) -> Network {
        self.network
    }

    fn coords_of(&self, code: &StationCode) -> Result<Coordinate, NetworkError> {
        self.network
            .get(code)
            .map(|s| s.coords())
            .ok_or(NetworkError::UnknownStation(*code))
    }
}
