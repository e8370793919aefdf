//! Consistency checks over a built network.
//!
//! The checks are advisory. A report with findings never stops the network
//! from serving queries; it is logged once after loading and kept around
//! for anyone who wants to look at it.

use std::collections::HashSet;
use std::fmt;

use tracing::{info, warn};

use crate::domain::StationCode;
use crate::network::Network;

/// Direct connections at least this long are probably data-entry errors.
pub const IMPLAUSIBLE_EDGE_MILES: f64 = 300.0;

/// A single finding of the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The network holds a station the roster does not know about
    UnknownStation { station: StationCode },

    /// A station has no outgoing connections
    Isolated { station: StationCode },

    /// An edge exists without its reverse
    Asymmetric {
        station: StationCode,
        neighbor: StationCode,
    },

    /// An edge points at a code the roster does not know about
    DanglingNeighbor {
        station: StationCode,
        neighbor: StationCode,
    },

    /// An edge is suspiciously long
    Implausible {
        station: StationCode,
        neighbor: StationCode,
        miles: f64,
    },
}

impl Diagnostic {
    /// The station the finding is about.
    pub fn station(&self) -> StationCode {
        match self {
            Diagnostic::UnknownStation { station }
            | Diagnostic::Isolated { station }
            | Diagnostic::Asymmetric { station, .. }
            | Diagnostic::DanglingNeighbor { station, .. }
            | Diagnostic::Implausible { station, .. } => *station,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownStation { station } => {
                write!(f, "{station} is not in the station roster")
            }
            Diagnostic::Isolated { station } => write!(f, "{station} has no connections"),
            Diagnostic::Asymmetric { station, neighbor } => write!(
                f,
                "{station} connects to {neighbor} but {neighbor} does not connect back"
            ),
            Diagnostic::DanglingNeighbor { station, neighbor } => write!(
                f,
                "{station} is connected to {neighbor} but {neighbor} is not in the station roster"
            ),
            Diagnostic::Implausible {
                station,
                neighbor,
                miles,
            } => write!(
                f,
                "{station} and {neighbor} are {miles:.1} miles apart, further than expected"
            ),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// True only if no diagnostic fired.
    pub ok: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            ok: diagnostics.is_empty(),
            diagnostics,
        }
    }

    /// Human-readable diagnostic messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Emit every diagnostic at `warn` level and a summary at `info`.
    pub fn log(&self) {
        for diagnostic in &self.diagnostics {
            warn!(station = %diagnostic.station(), "{diagnostic}");
        }
        if self.ok {
            info!("Network validation passed");
        } else {
            info!(
                findings = self.diagnostics.len(),
                "Network validation reported problems"
            );
        }
    }
}

/// Check `network` against the authoritative roster `known_codes`.
///
/// For every station: it must be in the roster and have at least one
/// connection. For every edge: the reverse edge must exist, the neighbor
/// must be in the roster, and the weight must stay under
/// [`IMPLAUSIBLE_EDGE_MILES`]. Findings come out in station-code order.
pub fn validate(network: &Network, known_codes: &HashSet<StationCode>) -> ValidationReport {
    let mut diagnostics = Vec::new();

    for station in network.stations() {
        let code = station.code();

        if !known_codes.contains(&code) {
            diagnostics.push(Diagnostic::UnknownStation { station: code });
        }
        if station.is_isolated() {
            diagnostics.push(Diagnostic::Isolated { station: code });
        }

        for neighbor in station.neighbors() {
            let reverse = network
                .get(&neighbor)
                .is_some_and(|n| n.is_connected_to(&code));
            if !reverse {
                diagnostics.push(Diagnostic::Asymmetric {
                    station: code,
                    neighbor,
                });
            }

            if !known_codes.contains(&neighbor) {
                diagnostics.push(Diagnostic::DanglingNeighbor {
                    station: code,
                    neighbor,
                });
            }

            if let Some(miles) = station.weight_to(&neighbor)
                && miles >= IMPLAUSIBLE_EDGE_MILES
            {
                diagnostics.push(Diagnostic::Implausible {
                    station: code,
                    neighbor,
                    miles,
                });
            }
        }
    }

    ValidationReport::from_diagnostics(diagnostics)
}
