//! A single node of the network.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{Coordinate, StationCode};

use super::error::NetworkError;

/// Stations whose nearest neighbor is closer than this are "closely packed".
///
/// Map consumers use it to shrink markers in dense corridors.
pub const CLOSE_STATION_MILES: f64 = 40.0;

/// A station with its coordinates and outgoing weighted connections.
///
/// Connections are directed: an edge stored here says nothing about the
/// neighbor's edge back. Weights are miles and always strictly positive.
#[derive(Debug, Clone)]
pub struct Station {
    code: StationCode,
    coords: Coordinate,
    connections: HashMap<StationCode, f64>,
}

impl Station {
    /// Create a station with no connections.
    pub fn new(code: StationCode, coords: Coordinate) -> Self {
        Self {
            code,
            coords,
            connections: HashMap::new(),
        }
    }

    /// Add (or replace) the edge from this station to `neighbor`.
    ///
    /// Rejects weights that are not finite and strictly positive.
    pub(crate) fn add_connection(
        &mut self,
        neighbor: StationCode,
        weight: f64,
    ) -> Result<(), NetworkError> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(NetworkError::InvalidWeight {
                from: self.code,
                to: neighbor,
                weight,
            });
        }
        self.connections.insert(neighbor, weight);
        Ok(())
    }

    pub fn code(&self) -> StationCode {
        self.code
    }

    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    /// Outgoing edges as `(neighbor, miles)`, in no particular order.
    pub fn connections(&self) -> impl Iterator<Item = (StationCode, f64)> + '_ {
        self.connections.iter().map(|(code, weight)| (*code, *weight))
    }

    /// Neighbor codes, sorted.
    pub fn neighbors(&self) -> Vec<StationCode> {
        let mut codes: Vec<StationCode> = self.connections.keys().copied().collect();
        codes.sort();
        codes
    }

    /// Whether there is an edge from this station to `neighbor`.
    pub fn is_connected_to(&self, neighbor: &StationCode) -> bool {
        self.connections.contains_key(neighbor)
    }

    /// Distance to `other` along a direct edge.
    ///
    /// The station itself is at distance zero; a station without a direct
    /// edge returns `None`.
    pub fn weight_to(&self, other: &StationCode) -> Option<f64> {
        if *other == self.code {
            return Some(0.0);
        }
        self.connections.get(other).copied()
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.connections.is_empty()
    }

    /// True if the nearest neighbor is within [`CLOSE_STATION_MILES`].
    pub fn is_closely_packed(&self) -> bool {
        self.connections
            .values()
            .any(|weight| *weight < CLOSE_STATION_MILES)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : [", self.code)?;
        for (i, neighbor) in self.neighbors().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{neighbor}")?;
        }
        f.write_str("]")
    }
}
