use crate::analyzers::ranking;
use crate::analyzers::types::{HOURS_PER_DAY, SlotCount, TripReport, ZoneCount};
use crate::parser::{parse_record, reader_builder};
use chrono::Utc;
use csv::ByteRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts trips per pickup zone and per (zone, hour) slot for one CSV file
/// at a time.
///
/// Every ingestion replaces the previous counts. Bad input never produces an
/// error: unreadable files leave the analyzer empty and malformed rows are
/// skipped.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    zone_counts: HashMap<Vec<u8>, u64>,
    zone_hour_counts: HashMap<Vec<u8>, [u64; HOURS_PER_DAY]>,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current counts with those of the CSV file at `path`.
    ///
    /// The first line is treated as a header and ignored. If the file cannot
    /// be opened the analyzer is left empty.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) {
        self.clear();

        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, "Could not open trip file, nothing ingested");
                return;
            }
        };

        self.ingest_reader(BufReader::new(file));
    }

    /// Replaces the current counts with those read from `reader`, skipping
    /// the first line.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) {
        self.clear();

        let mut header = Vec::new();
        match reader.read_until(b'\n', &mut header) {
            Ok(0) => {
                debug!("Trip file is empty");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Failed to read header line");
                return;
            }
        }

        let mut rdr = reader_builder().from_reader(reader);
        let mut record = ByteRecord::new();
        let mut rows = 0u64;
        let mut skipped = 0u64;

        loop {
            match rdr.read_byte_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!(error = %e, rows, "Read error, stopping ingestion early");
                    break;
                }
            }
            rows += 1;

            let pickup = match parse_record(&record) {
                Ok(pickup) => pickup,
                Err(reason) => {
                    skipped += 1;
                    // The header line is not counted by the csv reader
                    let line = record.position().map(|p| p.line() + 1);
                    debug!(?line, ?reason, "Skipping trip row");
                    continue;
                }
            };

            self.record_pickup(pickup.zone, pickup.hour);
        }

        info!(
            rows,
            accepted = rows - skipped,
            skipped,
            zones = self.zone_counts.len(),
            "Trip file ingested"
        );
    }

    /// Zones are keyed by their raw bytes, so names that are not valid UTF-8
    /// stay distinct.
    fn record_pickup(&mut self, zone: &[u8], hour: u8) {
        *self.zone_counts.entry(zone.to_vec()).or_default() += 1;
        self.zone_hour_counts.entry(zone.to_vec()).or_default()[usize::from(hour)] += 1;
    }

    fn clear(&mut self) {
        self.zone_counts.clear();
        self.zone_hour_counts.clear();
    }

    /// The `k` busiest pickup zones. Negative `k` yields nothing.
    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        ranking::top_zones(&self.zone_counts, k)
    }

    /// The `k` busiest (zone, hour) slots. Empty slots are never returned.
    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        ranking::top_busy_slots(&self.zone_hour_counts, k)
    }

    /// Bundles both rankings with the source name and a generation timestamp.
    pub fn report(&self, source: &str, zones_k: i64, slots_k: i64) -> TripReport {
        TripReport {
            generated_at: Utc::now(),
            source: source.to_string(),
            top_zones: self.top_zones(zones_k),
            top_slots: self.top_busy_slots(slots_k),
        }
    }

    pub fn zone_count(&self, zone: impl AsRef<[u8]>) -> u64 {
        self.zone_counts.get(zone.as_ref()).copied().unwrap_or(0)
    }

    pub fn zone_hour_counts(&self, zone: impl AsRef<[u8]>) -> Option<&[u64; HOURS_PER_DAY]> {
        self.zone_hour_counts.get(zone.as_ref())
    }

    pub fn distinct_zones(&self) -> usize {
        self.zone_counts.len()
    }

    pub fn total_trips(&self) -> u64 {
        self.zone_counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.zone_counts.is_empty()
    }
}
