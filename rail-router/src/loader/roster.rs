//! CSV roster parsing.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::{Coordinate, StationCode};
use crate::network::{ConnectionRow, StationRow};

use super::config::LoadConfig;
use super::error::LoadError;

/// Parse the station roster.
///
/// Reads the code, latitude and longitude columns named in `config`; any
/// other column is ignored. `roster` names the source in error messages.
pub fn parse_station_rows<R: Read>(
    reader: R,
    roster: &str,
    config: &LoadConfig,
) -> Result<Vec<StationRow>, LoadError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv.headers().map_err(|e| csv_error(roster, e))?.clone();
    let code_idx = column(&headers, &config.code_column, roster)?;
    let lat_idx = column(&headers, &config.latitude_column, roster)?;
    let lon_idx = column(&headers, &config.longitude_column, roster)?;

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|e| csv_error(roster, e))?;
        let line = line_of(&record);

        let raw_code = field(&record, code_idx);
        if is_gap(raw_code, &config.no_neighbor) {
            return Err(invalid(
                roster,
                line,
                format!("station code {raw_code:?} is blank or the no-neighbor marker"),
            ));
        }
        let code = parse_code(raw_code, roster, line)?;
        let latitude = parse_degrees(field(&record, lat_idx), "latitude", roster, line)?;
        let longitude = parse_degrees(field(&record, lon_idx), "longitude", roster, line)?;

        rows.push(StationRow::new(code, Coordinate::new(latitude, longitude)));
    }

    Ok(rows)
}

/// Parse the connection roster.
///
/// The code column names the station; every other column is a neighbor
/// slot, kept in column order. Blank slots and slots matching
/// `config.no_neighbor` are gaps. Slots are parsed up to and including the
/// first gap (which becomes `None`); whatever follows is kept as raw text
/// in [`ConnectionRow::unscanned`] and never parsed. Rows may have fewer
/// slots than the header.
pub fn parse_connection_rows<R: Read>(
    reader: R,
    roster: &str,
    config: &LoadConfig,
) -> Result<Vec<ConnectionRow>, LoadError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv.headers().map_err(|e| csv_error(roster, e))?.clone();
    let code_idx = column(&headers, &config.code_column, roster)?;

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|e| csv_error(roster, e))?;
        let line = line_of(&record);

        let code = parse_code(field(&record, code_idx), roster, line)?;

        let mut slots = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != code_idx)
            .map(|(_, slot)| slot);

        let mut neighbors = Vec::new();
        for slot in slots.by_ref() {
            if is_gap(slot, &config.no_neighbor) {
                neighbors.push(None);
                break;
            }
            neighbors.push(Some(parse_code(slot, roster, line)?));
        }
        let unscanned = slots
            .filter(|slot| !is_gap(slot, &config.no_neighbor))
            .map(str::to_string)
            .collect();

        rows.push(ConnectionRow::new(code, neighbors).with_unscanned(unscanned));
    }

    Ok(rows)
}

fn csv_error(roster: &str, source: csv::Error) -> LoadError {
    LoadError::Csv {
        roster: roster.to_string(),
        source,
    }
}

fn column(headers: &StringRecord, name: &str, roster: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn {
            roster: roster.to_string(),
            column: name.to_string(),
        })
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn invalid(roster: &str, line: u64, message: String) -> LoadError {
    LoadError::InvalidRow {
        roster: roster.to_string(),
        line,
        message,
    }
}

fn parse_code(raw: &str, roster: &str, line: u64) -> Result<StationCode, LoadError> {
    StationCode::parse_normalized(raw).map_err(|e| invalid(roster, line, e.to_string()))
}

fn parse_degrees(raw: &str, what: &str, roster: &str, line: u64) -> Result<f64, LoadError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(roster, line, format!("bad {what} {raw:?}")))
}

fn is_gap(raw: &str, no_neighbor: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case(no_neighbor)
}
