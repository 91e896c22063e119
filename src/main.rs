//! CLI entry point for the trip analyzer.
//!
//! Provides subcommands for ranking the busiest pickup zones, the busiest
//! (zone, hour) slots, and writing a combined report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use trip_analyzer::TripAnalyzer;
use trip_analyzer::output::{print_json, print_pretty, write_json, write_slots_csv, write_zones_csv};

#[derive(Parser)]
#[command(name = "trip_analyzer")]
#[command(about = "Rank busy pickup zones and hours from a trip CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the busiest pickup zones
    Zones {
        /// Trip CSV file
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Number of zones to list
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        k: i64,
    },
    /// List the busiest (zone, hour) slots
    Slots {
        /// Trip CSV file
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Number of slots to list
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        k: i64,
    },
    /// Build a report with both rankings and optionally write it to disk
    Report {
        /// Trip CSV file
        #[arg(value_name = "FILE")]
        source: PathBuf,

        /// Number of zones in the report
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        zones: i64,

        /// Number of slots in the report
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        slots: i64,

        /// Optional: JSON file to write the report to
        #[arg(long)]
        json: Option<PathBuf>,

        /// Optional: directory to write top_zones.csv and top_slots.csv into
        #[arg(long)]
        csv_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/trip_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("trip_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut analyzer = TripAnalyzer::new();

    match cli.command {
        Commands::Zones { source, k } => {
            analyzer.ingest_file(&source);
            for (rank, zone) in analyzer.top_zones(k).iter().enumerate() {
                info!(rank = rank + 1, zone = %zone.zone, count = zone.count, "Zone");
            }
        }
        Commands::Slots { source, k } => {
            analyzer.ingest_file(&source);
            for (rank, slot) in analyzer.top_busy_slots(k).iter().enumerate() {
                info!(
                    rank = rank + 1,
                    zone = %slot.zone,
                    hour = slot.hour,
                    count = slot.count,
                    "Slot"
                );
            }
        }
        Commands::Report {
            source,
            zones,
            slots,
            json,
            csv_dir,
        } => {
            analyzer.ingest_file(&source);
            let report = analyzer.report(&source.display().to_string(), zones, slots);

            print_pretty(&report);
            print_json(&report)?;

            if let Some(path) = json {
                write_json(&path, &report)?;
                info!(path = %path.display(), "Report written");
            }

            if let Some(dir) = csv_dir {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
                write_zones_csv(dir.join("top_zones.csv"), &report.top_zones)?;
                write_slots_csv(dir.join("top_slots.csv"), &report.top_slots)?;
                info!(dir = %dir.display(), "CSV rankings written");
            }
        }
    }

    Ok(())
}
