//! The station graph.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{Coordinate, StationCode};

use super::error::NetworkError;
use super::station::Station;

/// All stations of the network and their directed connections.
///
/// The network is logically bidirectional, but edges are stored one way
/// and reverse edges are never added on the caller's behalf; asymmetric
/// data is surfaced by [`crate::validate`]. Once built, a network is only
/// read, so it can be shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<StationCode, Station>,
}

impl Network {
    pub(crate) fn add_station(
        &mut self,
        code: StationCode,
        coords: Coordinate,
    ) -> Result<&mut Station, NetworkError> {
        if self.stations.contains_key(&code) {
            return Err(NetworkError::DuplicateStation(code));
        }
        Ok(self
            .stations
            .entry(code)
            .or_insert_with(|| Station::new(code, coords)))
    }

    /// Add a one-directional edge. Both endpoints must already exist.
    pub(crate) fn add_connection(
        &mut self,
        from: StationCode,
        to: StationCode,
        weight: f64,
    ) -> Result<(), NetworkError> {
        if !self.stations.contains_key(&to) {
            return Err(NetworkError::UnknownStation(to));
        }
        self.stations
            .get_mut(&from)
            .ok_or(NetworkError::UnknownStation(from))?
            .add_connection(to, weight)
    }

    /// Look up a station by code.
    pub fn get(&self, code: &StationCode) -> Option<&Station> {
        self.stations.get(code)
    }

    pub fn contains(&self, code: &StationCode) -> bool {
        self.stations.contains_key(code)
    }

    /// All stations, in code order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All station codes, in order.
    pub fn codes(&self) -> impl Iterator<Item = StationCode> + '_ {
        self.stations.keys().copied()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.stations.values().map(Station::degree).sum()
    }

    /// Weight of the direct edge `from -> to`, if there is one.
    pub fn weight(&self, from: &StationCode, to: &StationCode) -> Option<f64> {
        self.stations
            .get(from)
            .filter(|_| from != to)
            .and_then(|s| s.weight_to(to))
    }

    /// The station closest to `point`, if any lies within `max_miles`.
    ///
    /// Returns the station and its distance. Ties go to the lower code.
    pub fn nearest_station(&self, point: Coordinate, max_miles: f64) -> Option<(&Station, f64)> {
        let mut best: Option<(&Station, f64)> = None;
        for station in self.stations.values() {
            let miles = station.coords().distance_to(&point);
            if miles <= max_miles && best.is_none_or(|(_, closest)| miles < closest) {
                best = Some((station, miles));
            }
        }
        best
    }
}

/// One line per station: `CODE --> NEIGHBOR : miles , ...`.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for station in self.stations.values() {
            write!(f, "{} -->", station.code())?;
            for neighbor in station.neighbors() {
                if let Some(weight) = station.weight_to(&neighbor) {
                    write!(f, " {neighbor} : {weight:.1} ,")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
