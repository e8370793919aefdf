//! Shortest-path queries over a built network.
//!
//! Every query allocates its own working state and only reads the
//! [`Network`](crate::network::Network), so any number of queries can run
//! against one shared network at once.

mod dijkstra;
mod route;

#[cfg(test)]
mod path_tests;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use route::{Leg, Route, find_path};
