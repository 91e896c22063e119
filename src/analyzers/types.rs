//! Result types produced by the ranking queries.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hours in a day; one counter slot per hour.
pub const HOURS_PER_DAY: usize = 24;

/// Trip count for a single pickup zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// Trip count for a single (zone, hour-of-day) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

/// Both rankings for one ingested file, ready to be written out.
#[derive(Debug, Serialize)]
pub struct TripReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub top_zones: Vec<ZoneCount>,
    pub top_slots: Vec<SlotCount>,
}
