//! Point-to-point routes.

use tracing::debug;

use crate::domain::StationCode;
use crate::network::Network;

use super::dijkstra::shortest_paths;

/// One hop of a route: a direct connection between consecutive stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: StationCode,
    pub to: StationCode,
    pub miles: f64,
}

/// Result of [`find_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stations from source to destination, both included. Empty if not found.
    pub path: Vec<StationCode>,
    pub found: bool,
    /// Total length in miles. `None` if not found.
    pub distance_miles: Option<f64>,
    legs: Vec<Leg>,
}

impl Route {
    fn not_found() -> Self {
        Self {
            path: Vec::new(),
            found: false,
            distance_miles: None,
            legs: Vec::new(),
        }
    }

    /// The hops making up the route, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of hops. Zero for a route to the source itself.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

/// Shortest route from `source` to `destination`.
///
/// Unknown or unreachable endpoints give a route with `found == false` and
/// an empty path. A route from a station to itself is that one station at
/// distance zero.
pub fn find_path(network: &Network, source: StationCode, destination: StationCode) -> Route {
    let paths = shortest_paths(network, source);

    let Some(path) = paths.path_to(&destination) else {
        debug!(source = %source, destination = %destination, "No route");
        return Route::not_found();
    };

    let legs: Vec<Leg> = path
        .windows(2)
        .filter_map(|pair| {
            network.weight(&pair[0], &pair[1]).map(|miles| Leg {
                from: pair[0],
                to: pair[1],
                miles,
            })
        })
        .collect();

    Route {
        distance_miles: paths.distance_to(&destination),
        found: true,
        path,
        legs,
    }
}
