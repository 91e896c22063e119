//! Trip aggregation and ranking.
//!
//! [`analyzer::TripAnalyzer`] reads a trip CSV and keeps per-zone and
//! per-(zone, hour) counts; the ranking queries turn those counts into
//! ordered top-k lists.

pub mod analyzer;
pub mod ranking;
pub mod types;
