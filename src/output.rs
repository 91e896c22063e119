//! Output formatting and persistence for trip reports.
//!
//! Supports pretty-printing, JSON serialization, and CSV export of the
//! ranked zones and slots.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::{SlotCount, TripReport, ZoneCount};
use csv::WriterBuilder;
use std::fs::{self, File};
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &TripReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &TripReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes a report as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, report: &TripReport) -> Result<()> {
    let path = path.as_ref();
    let body = serde_json::to_vec_pretty(report)?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Wrote JSON report");
    Ok(())
}

/// Writes ranked zones to a CSV file with a `zone,count` header.
pub fn write_zones_csv(path: impl AsRef<Path>, zones: &[ZoneCount]) -> Result<()> {
    write_csv(path.as_ref(), zones)
}

/// Writes ranked slots to a CSV file with a `zone,hour,count` header.
pub fn write_slots_csv(path: impl AsRef<Path>, slots: &[SlotCount]) -> Result<()> {
    write_csv(path.as_ref(), slots)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "Wrote CSV");
    Ok(())
}
