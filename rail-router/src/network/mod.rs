//! The station graph and its construction.
//!
//! A [`Network`] is assembled once, from roster rows or through
//! [`NetworkBuilder`], and is read-only from then on.

mod builder;
mod error;
mod graph;
mod station;

pub use builder::{ConnectionRow, NetworkBuilder, StationRow, build_network};
pub use error::NetworkError;
pub use graph::Network;
pub use station::{CLOSE_STATION_MILES, Station};
