//! Party time parsing and formatting.
//!
//! Clients send party times without a year as `MM-dd HH:mm`. The year comes from the
//! injected clock so parsing stays deterministic under test.

use chrono::NaiveDateTime;

use crate::server::error::Error;

/// Display format for party start and end times.
pub const PARTY_TIME_FORMAT: &str = "%m-%d %H:%M";

/// Parses a `MM-dd HH:mm` value into a timestamp in the given year.
///
/// # Arguments
/// - `value` - Time as sent by the client, e.g. `03-12 10:00`
/// - `year` - Year the value is anchored to
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed timestamp
/// - `Err(Error::ParseError)` - Value is malformed or names a date that does not exist in `year`
pub fn parse_party_time(value: &str, year: i32) -> Result<NaiveDateTime, Error> {
    NaiveDateTime::parse_from_str(&format!("{}-{}", year, value.trim()), "%Y-%m-%d %H:%M")
        .map_err(|e| {
            Error::ParseError(format!(
                "Invalid party time {:?}, expected MM-dd HH:mm: {}",
                value, e
            ))
        })
}

/// Formats a timestamp for display as `MM-dd HH:mm`.
pub fn format_party_time(value: NaiveDateTime) -> String {
    value.format(PARTY_TIME_FORMAT).to_string()
}
