//! Single-source shortest paths over the station graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::domain::StationCode;
use crate::network::Network;

/// Result of [`shortest_paths`]: distances and predecessors from one source.
///
/// Stations that were never reached are simply absent from both maps.
/// The source has distance zero and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: StationCode,
    dist: HashMap<StationCode, f64>,
    prev: HashMap<StationCode, StationCode>,
}

impl ShortestPaths {
    pub fn source(&self) -> StationCode {
        self.source
    }

    /// Shortest distance from the source in miles, if reachable.
    pub fn distance_to(&self, station: &StationCode) -> Option<f64> {
        self.dist.get(station).copied()
    }

    /// The station before `station` on its shortest path.
    pub fn predecessor(&self, station: &StationCode) -> Option<StationCode> {
        self.prev.get(station).copied()
    }

    pub fn is_reachable(&self, station: &StationCode) -> bool {
        self.dist.contains_key(station)
    }

    pub fn distances(&self) -> &HashMap<StationCode, f64> {
        &self.dist
    }

    pub fn predecessors(&self) -> &HashMap<StationCode, StationCode> {
        &self.prev
    }

    /// Number of stations reached, the source included.
    pub fn reached_count(&self) -> usize {
        self.dist.len()
    }

    /// Walk the predecessor chain back from `destination`.
    ///
    /// Returns the stations in source-to-destination order, both ends
    /// included, or `None` if the chain breaks before the source.
    pub fn path_to(&self, destination: &StationCode) -> Option<Vec<StationCode>> {
        if !self.dist.contains_key(destination) {
            return None;
        }

        let mut path = vec![*destination];
        let mut current = *destination;
        while current != self.source {
            current = self.predecessor(&current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` over the whole reachable component.
///
/// The frontier is a binary min-heap keyed by tentative distance. A station
/// whose distance improves is pushed again rather than updated in place;
/// older entries for settled stations are skipped when popped. Ties pop in
/// station-code order, so repeated runs give identical results.
///
/// A source that is not in the network yields empty results.
pub fn shortest_paths(network: &Network, source: StationCode) -> ShortestPaths {
    let mut dist: HashMap<StationCode, f64> = HashMap::new();
    let mut prev: HashMap<StationCode, StationCode> = HashMap::new();

    if !network.contains(&source) {
        debug!(source = %source, "Source station not in network");
        return ShortestPaths { source, dist, prev };
    }

    let mut settled: HashSet<StationCode> = HashSet::with_capacity(network.len());
    let mut frontier = BinaryHeap::new();

    dist.insert(source, 0.0);
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(d), station))) = frontier.pop() {
        if !settled.insert(station) {
            continue;
        }

        let Some(node) = network.get(&station) else {
            continue;
        };

        trace!(station = %station, miles = d, "Settled");

        for (neighbor, weight) in node.connections() {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = d + weight;
            if dist.get(&neighbor).is_none_or(|&best| candidate < best) {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, station);
                frontier.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    debug!(
        source = %source,
        reached = dist.len(),
        stations = network.len(),
        "Shortest paths computed"
    );

    ShortestPaths { source, dist, prev }
}
