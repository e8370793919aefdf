//! Shortest-path routing over a fixed rail network.
//!
//! Stations and their connections are loaded once from two CSV rosters,
//! checked for consistency, and then answer shortest-route queries between
//! station codes. A small JSON web layer exposes the same queries.

pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod validate;
pub mod web;
