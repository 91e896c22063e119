//! Top-k ranking over the accumulated counts.
//!
//! Zones are ranked by their raw bytes and only turned into strings for the
//! returned records.

use crate::analyzers::types::{HOURS_PER_DAY, SlotCount, ZoneCount};
use std::collections::HashMap;

/// Converts a requested result size into a length. Negative sizes mean "none".
pub fn clamp_k(k: i64) -> usize {
    usize::try_from(k).unwrap_or(0)
}

/// Display form of a zone key. Invalid UTF-8 is replaced, so two distinct
/// keys may share a name.
pub fn zone_name(zone: &[u8]) -> String {
    String::from_utf8_lossy(zone).into_owned()
}

/// Ranks zones by trip count, highest first. Ties go to the lexicographically
/// smaller zone.
pub fn top_zones(zone_counts: &HashMap<Vec<u8>, u64>, k: i64) -> Vec<ZoneCount> {
    let mut ranked: Vec<(&[u8], u64)> = zone_counts
        .iter()
        .map(|(zone, &count)| (zone.as_slice(), count))
        .collect();

    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(clamp_k(k));

    ranked
        .into_iter()
        .map(|(zone, count)| ZoneCount {
            zone: zone_name(zone),
            count,
        })
        .collect()
}

/// Ranks non-empty (zone, hour) slots by trip count, highest first. Ties are
/// broken by zone, then by hour.
pub fn top_busy_slots(
    zone_hour_counts: &HashMap<Vec<u8>, [u64; HOURS_PER_DAY]>,
    k: i64,
) -> Vec<SlotCount> {
    let mut ranked: Vec<(&[u8], u8, u64)> = zone_hour_counts
        .iter()
        .flat_map(|(zone, hours)| {
            (0u8..)
                .zip(hours.iter())
                .filter(|&(_, &count)| count > 0)
                .map(move |(hour, &count)| (zone.as_slice(), hour, count))
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.2.cmp(&a.2)
            .then_with(|| a.0.cmp(b.0))
            .then_with(|| a.1.cmp(&b.1))
    });
    ranked.truncate(clamp_k(k));

    ranked
        .into_iter()
        .map(|(zone, hour, count)| SlotCount {
            zone: zone_name(zone),
            hour,
            count,
        })
        .collect()
}
