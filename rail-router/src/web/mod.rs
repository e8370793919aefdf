//! Web layer for the rail router.
//!
//! Exposes the loaded network as JSON: station listings, shortest routes,
//! distances and the startup validation report. Callers pass station codes
//! that are already resolved.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
