//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::validate::ValidationReport;

/// Shared application state.
///
/// The network is read-only after loading, so handlers share it without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded station network
    pub network: Arc<Network>,

    /// Validator output from startup
    pub validation: Arc<ValidationReport>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, validation: ValidationReport) -> Self {
        Self {
            network: Arc::new(network),
            validation: Arc::new(validation),
        }
    }
}
