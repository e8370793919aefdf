//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationCode;
use crate::network::Station;
use crate::planner::{Leg, Route};
use crate::validate::ValidationReport;

/// A station in list results.
#[derive(Debug, Serialize)]
pub struct StationSummary {
    pub code: StationCode,
    pub latitude: f64,
    pub longitude: f64,

    /// Number of outgoing connections
    pub degree: usize,

    /// Whether the nearest neighbor is close by (map hint)
    pub closely_packed: bool,
}

impl StationSummary {
    pub fn from_station(station: &Station) -> Self {
        let coords = station.coords();
        Self {
            code: station.code(),
            latitude: coords.latitude,
            longitude: coords.longitude,
            degree: station.degree(),
            closely_packed: station.is_closely_packed(),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationSummary>,
}

/// A direct connection from a station.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub code: StationCode,
    pub miles: f64,
}

/// One station with its connections.
#[derive(Debug, Serialize)]
pub struct StationDetail {
    #[serde(flatten)]
    pub summary: StationSummary,

    /// Connections sorted by neighbor code
    pub connections: Vec<ConnectionResult>,
}

impl StationDetail {
    pub fn from_station(station: &Station) -> Self {
        let connections = station
            .neighbors()
            .into_iter()
            .filter_map(|code| {
                station
                    .weight_to(&code)
                    .map(|miles| ConnectionResult { code, miles })
            })
            .collect();

        Self {
            summary: StationSummary::from_station(station),
            connections,
        }
    }
}

/// Request naming two stations (route or distance).
#[derive(Debug, Deserialize)]
pub struct StationPairRequest {
    /// Source station code
    pub from: String,

    /// Destination station code
    pub to: String,
}

/// One hop in a route response.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: StationCode,
    pub to: StationCode,
    pub miles: f64,
}

impl From<&Leg> for LegResult {
    fn from(leg: &Leg) -> Self {
        Self {
            from: leg.from,
            to: leg.to,
            miles: leg.miles,
        }
    }
}

/// Shortest route between two stations.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub found: bool,

    /// Station codes from source to destination; empty if not found
    pub path: Vec<StationCode>,

    pub distance_miles: Option<f64>,

    pub legs: Vec<LegResult>,
}

impl RouteResponse {
    pub fn from_route(route: &Route) -> Self {
        Self {
            found: route.found,
            path: route.path.clone(),
            distance_miles: route.distance_miles,
            legs: route.legs().iter().map(LegResult::from).collect(),
        }
    }
}

/// Great-circle distance between two stations.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: StationCode,
    pub to: StationCode,
    pub miles: f64,
}

/// Request for the station nearest a point.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub lat: f64,
    pub lon: f64,

    /// Search radius in miles (defaults to 10)
    pub radius_miles: Option<f64>,
}

/// Station nearest a point, if one is within the radius.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub station: Option<StationSummary>,
    pub miles: Option<f64>,
}

/// Validator output.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub ok: bool,
    pub diagnostics: Vec<String>,
}

impl From<&ValidationReport> for ValidationResponse {
    fn from(report: &ValidationReport) -> Self {
        Self {
            ok: report.ok,
            diagnostics: report.messages(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
