use std::env;
use std::fs;
use std::path::PathBuf;
use trip_analyzer::output::{write_json, write_zones_csv};
use trip_analyzer::{SlotCount, TripAnalyzer, ZoneCount};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_trips.csv");

fn zone(zone: &str, count: u64) -> ZoneCount {
    ZoneCount {
        zone: zone.to_string(),
        count,
    }
}

fn slot(zone: &str, hour: u8, count: u64) -> SlotCount {
    SlotCount {
        zone: zone.to_string(),
        hour,
        count,
    }
}

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_pipeline() {
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(FIXTURE);

    // Trips 9 to 13 are malformed and skipped
    assert_eq!(analyzer.total_trips(), 9);
    assert_eq!(
        analyzer.top_zones(10),
        vec![
            zone("Midtown", 4),
            zone("Chelsea", 2),
            zone("SoHo", 2),
            zone("Harlem", 1),
        ]
    );
    assert_eq!(
        analyzer.top_busy_slots(4),
        vec![
            slot("Midtown", 8, 3),
            slot("Chelsea", 0, 1),
            slot("Chelsea", 17, 1),
            slot("Harlem", 23, 1),
        ]
    );

    for ranked in analyzer.top_zones(100) {
        let hours = analyzer.zone_hour_counts(&ranked.zone).unwrap();
        assert_eq!(hours.iter().sum::<u64>(), ranked.count);
    }
    assert!(analyzer.top_busy_slots(100).iter().all(|s| s.count > 0));
}

#[test]
fn test_second_file_replaces_first() {
    let first = write_temp(
        "trip_analyzer_it_first.csv",
        "h\nx,ZoneA,x,2023-01-01 05:30:00,x,x\nx,ZoneA,x,2023-01-01 05:45:00,x,x\n",
    );
    let second = write_temp(
        "trip_analyzer_it_second.csv",
        "h\nx,ZoneB,x,2023-01-01 06:00:00,x,x\n",
    );

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&first);
    assert_eq!(analyzer.top_zones(5), vec![zone("ZoneA", 2)]);

    analyzer.ingest_file(&second);
    assert_eq!(analyzer.top_zones(5), vec![zone("ZoneB", 1)]);
    assert_eq!(analyzer.top_busy_slots(5), vec![slot("ZoneB", 6, 1)]);

    fs::remove_file(first).unwrap();
    fs::remove_file(second).unwrap();
}

#[test]
fn test_missing_file_yields_empty_rankings() {
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(FIXTURE);
    analyzer.ingest_file("does/not/exist.csv");

    assert!(analyzer.top_zones(5).is_empty());
    assert!(analyzer.top_busy_slots(5).is_empty());
}

#[test]
fn test_k_clamping() {
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(FIXTURE);

    assert!(analyzer.top_zones(-1).is_empty());
    assert_eq!(analyzer.top_zones(1000).len(), 4);
    assert_eq!(analyzer.top_busy_slots(1000).len(), 7);
}

#[test]
fn test_report_written_to_disk() {
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(FIXTURE);
    let report = analyzer.report(FIXTURE, 2, 1);

    let json_path = env::temp_dir().join("trip_analyzer_it_report.json");
    let csv_path = env::temp_dir().join("trip_analyzer_it_zones.csv");
    write_json(&json_path, &report).unwrap();
    write_zones_csv(&csv_path, &report.top_zones).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["top_zones"].as_array().unwrap().len(), 2);
    assert_eq!(value["top_slots"][0]["zone"], "Midtown");

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["zone,count", "Midtown,4", "Chelsea,2"]);

    fs::remove_file(json_path).unwrap();
    fs::remove_file(csv_path).unwrap();
}
