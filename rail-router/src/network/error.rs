//! Network construction errors.
//!
//! These are structural failures: a network that hits one of them is not
//! built at all. Advisory findings on a built network are reported by
//! [`crate::validate`] instead.

use crate::domain::StationCode;

/// Errors raised while building a [`super::Network`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A connection refers to a station that was never added
    #[error("station {0} is not in the station roster")]
    UnknownStation(StationCode),

    /// The station roster lists the same code twice
    #[error("station {0} appears more than once in the station roster")]
    DuplicateStation(StationCode),

    /// Edge weights must be finite and strictly positive
    #[error("invalid connection {from} -> {to}: weight {weight} must be positive")]
    InvalidWeight {
        from: StationCode,
        to: StationCode,
        weight: f64,
    },
}
