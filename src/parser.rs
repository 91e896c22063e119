//! Row parsing for trip CSV files.
//!
//! Rows are split on bare commas with no quoting or escaping, so a comma
//! inside a field is always read as a delimiter.

use csv::{ByteRecord, ReaderBuilder, Terminator};

/// Number of comma-separated fields a trip row must have.
pub const FIELD_COUNT: usize = 6;

const ZONE_FIELD: usize = 1;
const PICKUP_TIME_FIELD: usize = 3;

/// A trip row that passed shape checks: the pickup zone and its hour of day.
#[derive(Debug, PartialEq, Eq)]
pub struct Pickup<'a> {
    pub zone: &'a [u8],
    pub hour: u8,
}

/// Why a row was rejected. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    FieldCount(usize),
    EmptyZone,
    EmptyPickupTime,
    BadHour,
}

/// Reader configuration for trip files: plain comma splitting, rows ended by
/// `\n` only, any number of fields per row, and no header handling (the
/// caller skips the header line).
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .comment(None);
    builder
}

/// Extracts the hour from a `YYYY-MM-DD HH:MM...` style timestamp.
///
/// Requires at least 16 bytes, a space at offset 10, a colon at offset 13 and
/// two ASCII digits in between forming a value in `0..=23`.
pub fn parse_hour(datetime: &[u8]) -> Option<u8> {
    if datetime.len() < 16 || datetime[10] != b' ' || datetime[13] != b':' {
        return None;
    }

    let (h1, h2) = (datetime[11], datetime[12]);
    if !h1.is_ascii_digit() || !h2.is_ascii_digit() {
        return None;
    }

    let hour = (h1 - b'0') * 10 + (h2 - b'0');
    (hour <= 23).then_some(hour)
}

/// Checks a record's shape and pulls out the pickup zone and hour.
pub fn parse_record(record: &ByteRecord) -> Result<Pickup<'_>, Rejection> {
    if record.len() != FIELD_COUNT {
        return Err(Rejection::FieldCount(record.len()));
    }

    let zone = &record[ZONE_FIELD];
    let pickup_time = &record[PICKUP_TIME_FIELD];

    if zone.is_empty() {
        return Err(Rejection::EmptyZone);
    }
    if pickup_time.is_empty() {
        return Err(Rejection::EmptyPickupTime);
    }

    let hour = parse_hour(pickup_time).ok_or(Rejection::BadHour)?;
    Ok(Pickup { zone, hour })
}
