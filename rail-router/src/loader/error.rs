//! Roster loading error types.

use std::path::PathBuf;

use crate::network::NetworkError;

/// Errors that can occur while reading the rosters and building the network.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Roster file could not be opened
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error in {roster}: {source}")]
    Csv {
        roster: String,
        #[source]
        source: csv::Error,
    },

    /// A required header is missing
    #[error("{roster} has no {column:?} column")]
    MissingColumn { roster: String, column: String },

    /// A row could not be interpreted
    #[error("{roster} line {line}: {message}")]
    InvalidRow {
        roster: String,
        line: u64,
        message: String,
    },

    /// The rows were read but do not form a network
    #[error("network construction failed: {0}")]
    Network(#[from] NetworkError),
}
