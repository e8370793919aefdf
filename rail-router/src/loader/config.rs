//! Where the rosters live and how they are laid out.

use std::path::PathBuf;

/// Default "no neighbor" marker in the connection roster.
pub const DEFAULT_NO_NEIGHBOR: &str = "None";

/// Configuration for loading the two rosters.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Path to the station roster (code, latitude, longitude, ...).
    pub stations_path: PathBuf,

    /// Path to the connection roster (code, neighbor slots...).
    pub connections_path: PathBuf,

    /// Header of the station code column in both rosters.
    pub code_column: String,

    /// Header of the latitude column in the station roster.
    pub latitude_column: String,

    /// Header of the longitude column in the station roster.
    pub longitude_column: String,

    /// Slot value meaning "no neighbor here". Blank slots mean the same.
    pub no_neighbor: String,
}

impl LoadConfig {
    /// Create a config for the given roster paths with the default layout.
    pub fn new(stations_path: impl Into<PathBuf>, connections_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            connections_path: connections_path.into(),
            code_column: "code".to_string(),
            latitude_column: "Latitude".to_string(),
            longitude_column: "Longitude".to_string(),
            no_neighbor: DEFAULT_NO_NEIGHBOR.to_string(),
        }
    }

    /// Set a custom "no neighbor" marker.
    pub fn with_no_neighbor(mut self, marker: impl Into<String>) -> Self {
        self.no_neighbor = marker.into();
        self
    }

    /// Set custom headers for the station roster columns.
    pub fn with_columns(
        mut self,
        code: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.code_column = code.into();
        self.latitude_column = latitude.into();
        self.longitude_column = longitude.into();
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new("data/train_data.csv", "data/train_connections.csv")
    }
}
