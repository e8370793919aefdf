//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Radius of the Earth used for every distance in the network, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other`, in miles.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_miles(*self, *other)
    }
}

/// Haversine distance between two coordinates, in miles.
///
/// Symmetric, non-negative and zero for identical points.
///
/// ```
/// use rail_router::domain::{Coordinate, distance_miles};
///
/// let chicago = Coordinate::new(41.8789, -87.6359);
/// assert_eq!(distance_miles(chicago, chicago), 0.0);
/// ```
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push h a hair past 1 for antipodal points
    2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
}
