//! Domain types for the rail network.
//!
//! Station codes and coordinates are validated or total at construction
//! time, so graph code that receives them can trust their validity.

mod coordinate;
mod station_code;

pub use coordinate::{Coordinate, EARTH_RADIUS_MILES, distance_miles};
pub use station_code::{InvalidStationCode, MAX_CODE_LEN, StationCode};
