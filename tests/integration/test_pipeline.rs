//! End-to-end pipeline tests: question in, chart bytes and summary out.

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use tempfile::TempDir;

use aircover::{Config, CoverageEngine, FlightData, NO_MATCH_MESSAGE};

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_string_lossy().to_string()
}

/// Engine over a small but representative dataset.
fn create_test_engine(dir: &TempDir) -> CoverageEngine {
    let mut config = Config::default();
    config.data.sortie_mapping = write_file(
        dir,
        "mapping.csv",
        "RID,Platform,Altitude,Speed,c_uas\n\
         S-1,Orb,High,Slow,PCL\n\
         S-2,Orb,High,Slow,\n\
         S-3,Mavic,Low,Fast,GOTCHA\n\
         S-4,Orb,Medium,Medium,PCL\n",
    );
    config.data.fixed_fences = write_file(
        dir,
        "fences.csv",
        "track_id,event_type,seconds_in_range\n\
         S-1,enter,120.0\n\
         S-2,enter,30.0\n\
         S-2,enter,45.0\n\
         S-2,exit,999.0\n\
         S-3,enter,50.0\n\
         S-3,Exit,1.0\n",
    );

    let data = Arc::new(FlightData::load(&config.data).unwrap());
    CoverageEngine::new(&config, data)
}

#[test]
fn test_fully_detected_flight() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    let response = engine
        .ask("draw a pie chart for the percentage of airtime detected by pcl for high altitude slow speed orb flights")
        .unwrap();

    // S-1 and S-2 match; only S-1 was detected by PCL
    let summary = &response.summary;
    assert_eq!(summary.flights, 2);
    assert_eq!(summary.total_airtime_sec, 195.0);
    assert_eq!(summary.detected_airtime_sec, 120.0);
    assert!((summary.coverage_pct - 61.538).abs() < 0.01);
    assert_eq!(summary.sensor, "PCL");
    assert_eq!(&response.image_png[..4], &PNG_MAGIC);
}

#[test]
fn test_exit_events_never_counted() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    // S-2 alone: two enter events (30 + 45), one 999s exit to be ignored
    let response = engine.ask("undetected orb flights").unwrap();
    assert!(response.summary.total_airtime_sec < 999.0);

    let response = engine.ask("mavic flights").unwrap();
    // S-3: 50s enter plus a capitalized Exit row that must not count
    assert_eq!(response.summary.total_airtime_sec, 50.0);
}

#[test]
fn test_no_match_renders_placeholder() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    let response = engine.ask("blimp flights detected by stardust").unwrap();
    let summary = &response.summary;

    assert_eq!(summary.flights, 0);
    assert_eq!(summary.total_airtime_sec, 0.0);
    assert_eq!(summary.detected_airtime_sec, 0.0);
    assert_eq!(summary.coverage_pct, 0.0);
    assert_eq!(summary.message.as_deref(), Some(NO_MATCH_MESSAGE));
    assert_eq!(&response.image_png[..4], &PNG_MAGIC);
}

#[test]
fn test_unknown_sensor_is_zero_coverage_not_error() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    let response = engine.ask("orb flights detected by stardust").unwrap();
    let summary = &response.summary;

    assert!(summary.total_airtime_sec > 0.0);
    assert_eq!(summary.detected_airtime_sec, 0.0);
    assert_eq!(summary.coverage_pct, 0.0);
    assert!(summary.message.is_none());
}

#[test]
fn test_no_keywords_selects_entire_table() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    let response = engine.ask("what does coverage look like overall").unwrap();
    let summary = &response.summary;

    assert_eq!(summary.flights, 4);
    assert_eq!(summary.total_airtime_sec, 245.0);
    assert!(summary.filters_applied.is_empty());
    // Sensor falls back to the configured default
    assert_eq!(summary.sensor, "PCL");
    assert_eq!(summary.detected_airtime_sec, 120.0);
}

#[test]
fn test_same_question_twice_is_identical() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    let question = "low altitude fast mavic flights detected by gotcha";
    let first = engine.ask(question).unwrap();
    let second = engine.ask(question).unwrap();

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.image_png, second.image_png);
}

#[test]
fn test_coverage_bounds_hold_across_questions() {
    let dir = TempDir::new().unwrap();
    let engine = create_test_engine(&dir);

    for question in [
        "",
        "orb flights",
        "high altitude flights detected by gotcha",
        "slow orb flights detected by pcl",
        "medium flights",
        "fast mavic flights",
    ] {
        let summary = engine.ask(question).unwrap().summary;
        assert!(summary.detected_airtime_sec <= summary.total_airtime_sec);
        assert!((0.0..=100.0).contains(&summary.coverage_pct));
        if summary.total_airtime_sec == 0.0 {
            assert_eq!(summary.coverage_pct, 0.0);
        }
    }
}

#[test]
fn test_config_file_drives_pipeline() {
    let dir = TempDir::new().unwrap();
    let mapping = write_file(
        &dir,
        "mapping.csv",
        "RID,Platform,Altitude,Speed,c_uas\nS-1,Orb,High,Slow,GOTCHA\n",
    );
    let fences = write_file(
        &dir,
        "fences.csv",
        "track_id,event_type,seconds_in_range\nS-1,enter,60.0\n",
    );
    let config_path = write_file(
        &dir,
        "aircover.toml",
        &format!(
            "[data]\nsortie_mapping = \"{mapping}\"\nfixed_fences = \"{fences}\"\n\n\
             [query]\ndefault_sensor = \"GOTCHA\"\n\n\
             [chart]\nwidth = 400\nheight = 400\n"
        ),
    );

    let config = Config::from_file(&config_path).unwrap();
    let data = Arc::new(FlightData::load(&config.data).unwrap());
    let engine = CoverageEngine::new(&config, data);

    // No sensor keyword in the question: the configured default applies
    let response = engine.ask("orb flights").unwrap();
    assert_eq!(response.summary.sensor, "GOTCHA");
    assert_eq!(response.summary.coverage_pct, 100.0);
    assert_eq!(&response.image_png[..4], &PNG_MAGIC);
}
