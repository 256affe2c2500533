//! Dataset loading tests against real files on disk.

use std::fs::File;
use std::io::Write;

use tempfile::TempDir;

use aircover::{AircoverError, DataConfig, DatasetError, FlightData};

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_string_lossy().to_string()
}

fn data_config(dir: &TempDir, mapping: &str, fences: &str) -> DataConfig {
    DataConfig {
        sortie_mapping: write_file(dir, "mapping.csv", mapping),
        fixed_fences: write_file(dir, "fences.csv", fences),
    }
}

#[test]
fn test_load_well_formed_tables() {
    let dir = TempDir::new().unwrap();
    let config = data_config(
        &dir,
        "RID,Platform,Altitude,Speed,c_uas\n\
         S-1,Orb,High,Slow,PCL\n\
         S-2,Mavic,Low,Fast,\n",
        "track_id,event_type,seconds_in_range\n\
         S-1,enter,120.5\n\
         S-1,exit,3.0\n\
         S-2,enter,80.0\n",
    );

    let data = FlightData::load(&config).unwrap();
    let stats = data.stats();
    assert_eq!(stats.sorties, 2);
    assert_eq!(stats.fence_events, 3);
    assert_eq!(stats.enter_events, 2);
    assert_eq!(data.events_for("S-1").len(), 2);

    // Empty c_uas cells load as empty strings
    assert_eq!(data.sorties()[1].c_uas, "");
}

#[test]
fn test_missing_file_fails() {
    let config = DataConfig {
        sortie_mapping: "/nonexistent/mapping.csv".to_string(),
        fixed_fences: "/nonexistent/fences.csv".to_string(),
    };
    assert!(matches!(
        FlightData::load(&config),
        Err(AircoverError::Dataset(DatasetError::Read { .. }))
    ));
}

#[test]
fn test_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let config = data_config(
        &dir,
        "RID,Platform,Altitude,Speed,c_uas\nS-1,Orb,High,Slow,PCL\n",
        // No seconds_in_range column
        "track_id,event_type\nS-1,enter\n",
    );
    assert!(matches!(
        FlightData::load(&config),
        Err(AircoverError::Dataset(DatasetError::Record { .. }))
    ));
}

#[test]
fn test_non_numeric_duration_fails() {
    let dir = TempDir::new().unwrap();
    let config = data_config(
        &dir,
        "RID,Platform,Altitude,Speed,c_uas\nS-1,Orb,High,Slow,PCL\n",
        "track_id,event_type,seconds_in_range\nS-1,enter,soon\n",
    );
    assert!(matches!(
        FlightData::load(&config),
        Err(AircoverError::Dataset(DatasetError::Record { .. }))
    ));
}

#[test]
fn test_duplicate_rid_fails() {
    let dir = TempDir::new().unwrap();
    let config = data_config(
        &dir,
        "RID,Platform,Altitude,Speed,c_uas\n\
         S-1,Orb,High,Slow,PCL\n\
         S-1,Orb,Low,Fast,\n",
        "track_id,event_type,seconds_in_range\n",
    );
    assert!(matches!(
        FlightData::load(&config),
        Err(AircoverError::Dataset(DatasetError::DuplicateRid(_)))
    ));
}

#[test]
fn test_negative_duration_fails() {
    let dir = TempDir::new().unwrap();
    let config = data_config(
        &dir,
        "RID,Platform,Altitude,Speed,c_uas\nS-1,Orb,High,Slow,PCL\n",
        "track_id,event_type,seconds_in_range\nS-1,enter,-10.0\n",
    );
    assert!(matches!(
        FlightData::load(&config),
        Err(AircoverError::Dataset(DatasetError::NegativeDuration { .. }))
    ));
}
