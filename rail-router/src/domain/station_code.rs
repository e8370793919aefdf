//! Station identifiers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Longest station code accepted, in bytes.
pub const MAX_CODE_LEN: usize = 16;

/// Why a string is not a usable station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStationCode {
    #[error("station code is empty")]
    Empty,

    #[error("station code {input:?} contains {found:?}; only printable ASCII without spaces or commas is allowed")]
    BadCharacter { input: String, found: char },

    #[error("station code {input:?} is longer than {max} characters", max = MAX_CODE_LEN)]
    TooLong { input: String },
}

/// Identifier of a station in the rosters.
///
/// A code is a short run of printable ASCII with no whitespace and no
/// commas, so it can sit in a CSV cell unquoted and in a URL path as is.
/// Amtrak-style `CHI`, numeric `8727100` and `place-sstat` are all valid.
///
/// The code is stored inline, which keeps `StationCode` `Copy` and lets the
/// planner move codes through its heap and maps without allocating.
/// Ordering is plain string ordering.
///
/// # Examples
///
/// ```
/// use rail_router::domain::StationCode;
///
/// let chi = StationCode::parse("CHI").unwrap();
/// assert_eq!(chi.as_str(), "CHI");
///
/// // Roster cells are trimmed and upper-cased
/// assert_eq!(StationCode::parse_normalized(" chi ").unwrap(), chi);
///
/// // A place name is not a code
/// assert!(StationCode::parse("Chicago Union").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode {
    // Zero-padded; zero sorts below every allowed byte, so the derived
    // ordering matches `str` ordering.
    bytes: [u8; MAX_CODE_LEN],
}

impl StationCode {
    /// Parse a station code exactly as given.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode::Empty);
        }
        if let Some(found) = s.chars().find(|&c| !is_code_char(c)) {
            return Err(InvalidStationCode::BadCharacter {
                input: s.to_string(),
                found,
            });
        }
        if s.len() > MAX_CODE_LEN {
            return Err(InvalidStationCode::TooLong {
                input: s.to_string(),
            });
        }

        let mut bytes = [0; MAX_CODE_LEN];
        bytes[..s.len()].copy_from_slice(s.as_bytes());
        Ok(Self { bytes })
    }

    /// Parse a code after trimming surrounding whitespace and upper-casing.
    ///
    /// Both roster cells and query strings go through this.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        let len = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_CODE_LEN);
        std::str::from_utf8(&self.bytes[..len]).expect("station codes are ASCII")
    }
}

fn is_code_char(c: char) -> bool {
    c.is_ascii_graphic() && c != ','
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StationCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StationCode {
    type Err = InvalidStationCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_normalized(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_code_styles() {
        for raw in ["CHI", "KKI", "8727100", "PLACE-SSTAT", "NYP_LIRR", "X"] {
            assert_eq!(StationCode::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn roster_cells_are_normalized() {
        let code = StationCode::parse_normalized("  mat\t").unwrap();
        assert_eq!(code.as_str(), "MAT");
        // Exact parsing keeps case
        assert_eq!(StationCode::parse("mat").unwrap().as_str(), "mat");
    }

    #[test]
    fn place_name_is_not_a_code() {
        assert_eq!(
            StationCode::parse_normalized("Chicago Union"),
            Err(InvalidStationCode::BadCharacter {
                input: "CHICAGO UNION".to_string(),
                found: ' ',
            })
        );
    }

    #[test]
    fn unsplit_cell_is_not_a_code() {
        // Two neighbors that ended up in one quoted cell
        let err = StationCode::parse("CHI,MAT").unwrap_err();
        assert!(matches!(err, InvalidStationCode::BadCharacter { found: ',', .. }));
    }

    #[test]
    fn blank_cell_is_empty() {
        assert_eq!(StationCode::parse(""), Err(InvalidStationCode::Empty));
        assert_eq!(
            StationCode::parse_normalized("   "),
            Err(InvalidStationCode::Empty)
        );
    }

    #[test]
    fn non_ascii_rejected() {
        let err = StationCode::parse("MÜN").unwrap_err();
        assert!(matches!(err, InvalidStationCode::BadCharacter { found: 'Ü', .. }));
    }

    #[test]
    fn length_limit() {
        let longest = "A".repeat(MAX_CODE_LEN);
        assert!(StationCode::parse(&longest).is_ok());

        let err = StationCode::parse(&format!("{longest}B")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "station code \"AAAAAAAAAAAAAAAAB\" is longer than 16 characters"
        );
    }

    #[test]
    fn marker_word_is_an_ordinary_code() {
        // Whether "None" means a gap is the loader's decision, not the type's
        assert_eq!(StationCode::parse_normalized("None").unwrap().as_str(), "NONE");
    }

    #[test]
    fn prefixes_sort_first() {
        let mut codes: Vec<_> = ["CHM", "CH", "CHI", "C"]
            .iter()
            .map(|s| StationCode::parse(s).unwrap())
            .collect();
        codes.sort();
        let sorted: Vec<_> = codes.iter().map(StationCode::as_str).collect();
        assert_eq!(sorted, vec!["C", "CH", "CHI", "CHM"]);
    }

    #[test]
    fn formatting() {
        let code = StationCode::parse("8727100").unwrap();
        assert_eq!(code.to_string(), "8727100");
        assert_eq!(format!("{code:?}"), "StationCode(\"8727100\")");
    }

    #[test]
    fn serde_as_plain_string() {
        let code = StationCode::parse("BAL").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"BAL\"");

        let back: StationCode = serde_json::from_str("\" bal \"").unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<StationCode>("\"Penn Station\"").is_err());
    }
}
