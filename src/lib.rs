pub mod analyzers;
pub mod output;
pub mod parser;

pub use analyzers::analyzer::TripAnalyzer;
pub use analyzers::types::{SlotCount, TripReport, ZoneCount};
