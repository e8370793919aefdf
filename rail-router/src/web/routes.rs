//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, warn};

use crate::domain::{Coordinate, StationCode, distance_miles};
use crate::planner::find_path;

use super::dto::*;
use super::state::AppState;

/// Radius used by `/nearest` when the request gives none.
const DEFAULT_NEAREST_RADIUS_MILES: f64 = 10.0;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:code", get(station_detail))
        .route("/route", get(route))
        .route("/distance", get(distance))
        .route("/nearest", get(nearest))
        .route("/validation", get(validation))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in code order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .map(StationSummary::from_station)
        .collect();
    Json(StationsResponse { stations })
}

/// One station with its connections.
async fn station_detail(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StationDetail>, AppError> {
    let code = parse_code(&code, "station")?;
    let station = state
        .network
        .get(&code)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {code}"),
        })?;
    Ok(Json(StationDetail::from_station(station)))
}

/// Shortest route between two stations.
///
/// Unknown or unreachable stations are a normal `found: false` answer.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<StationPairRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_code(&req.from, "source")?;
    let to = parse_code(&req.to, "destination")?;

    let route = find_path(&state.network, from, to);
    debug!(
        from = %from,
        to = %to,
        found = route.found,
        hops = route.hop_count(),
        "Route query"
    );

    Ok(Json(RouteResponse::from_route(&route)))
}

/// Great-circle distance between two stations, regardless of connections.
async fn distance(
    State(state): State<AppState>,
    Query(req): Query<StationPairRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let from = parse_code(&req.from, "source")?;
    let to = parse_code(&req.to, "destination")?;

    let coords_of = |code: StationCode| {
        state
            .network
            .get(&code)
            .map(|s| s.coords())
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown station: {code}"),
            })
    };
    let miles = distance_miles(coords_of(from)?, coords_of(to)?);

    Ok(Json(DistanceResponse { from, to, miles }))
}

/// Station closest to a coordinate.
async fn nearest(
    State(state): State<AppState>,
    Query(req): Query<NearestRequest>,
) -> Result<Json<NearestResponse>, AppError> {
    let radius = req.radius_miles.unwrap_or(DEFAULT_NEAREST_RADIUS_MILES);
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(AppError::BadRequest {
            message: format!("Invalid radius: {radius}"),
        });
    }

    let point = Coordinate::new(req.lat, req.lon);
    let response = match state.network.nearest_station(point, radius) {
        Some((station, miles)) => NearestResponse {
            station: Some(StationSummary::from_station(station)),
            miles: Some(miles),
        },
        None => NearestResponse {
            station: None,
            miles: None,
        },
    };
    Ok(Json(response))
}

/// Report computed by the validator at startup.
async fn validation(State(state): State<AppState>) -> Json<ValidationResponse> {
    Json(ValidationResponse::from(state.validation.as_ref()))
}

fn parse_code(raw: &str, what: &str) -> Result<StationCode, AppError> {
    StationCode::parse_normalized(raw).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {what} station code: {raw}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
