//! One-shot loader for the sortie mapping and fence-event tables.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::records::{FenceEvent, SortieRecord};
use crate::config::DataConfig;
use crate::error::{DatasetError, Result};

/// The two source tables, loaded once and immutable thereafter.
///
/// Fence events are indexed by `track_id` at load so the per-query join is a
/// hash lookup. Queries read this through a shared handle and never write.
#[derive(Debug)]
pub struct FlightData {
    sorties: Vec<SortieRecord>,
    events_by_track: HashMap<String, Vec<FenceEvent>>,
    event_count: usize,
}

/// Row counts reported by the `stats` command.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    pub sorties: usize,
    pub fence_events: usize,
    pub enter_events: usize,
}

impl FlightData {
    /// Load both tables from their configured locations.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let sorties = read_table::<SortieRecord>(&config.sortie_mapping_path())?;
        let events = read_table::<FenceEvent>(&config.fixed_fences_path())?;
        let data = Self::from_records(sorties, events)?;

        let stats = data.stats();
        info!(
            sorties = stats.sorties,
            fence_events = stats.fence_events,
            enter_events = stats.enter_events,
            "Flight data loaded"
        );
        Ok(data)
    }

    /// Build the dataset from in-memory rows, enforcing table invariants:
    /// sortie ids unique, durations non-negative.
    pub fn from_records(sorties: Vec<SortieRecord>, events: Vec<FenceEvent>) -> Result<Self> {
        let mut seen = HashSet::new();
        for sortie in &sorties {
            if !seen.insert(sortie.rid.as_str()) {
                return Err(DatasetError::DuplicateRid(sortie.rid.clone()).into());
            }
        }

        let event_count = events.len();
        let mut events_by_track: HashMap<String, Vec<FenceEvent>> = HashMap::new();
        for event in events {
            if event.seconds_in_range < 0.0 {
                return Err(DatasetError::NegativeDuration {
                    track_id: event.track_id,
                    seconds: event.seconds_in_range,
                }
                .into());
            }
            events_by_track
                .entry(event.track_id.clone())
                .or_default()
                .push(event);
        }

        Ok(Self {
            sorties,
            events_by_track,
            event_count,
        })
    }

    /// All sortie rows.
    pub fn sorties(&self) -> &[SortieRecord] {
        &self.sorties
    }

    /// Fence events recorded for one track, empty when none exist.
    pub fn events_for(&self, track_id: &str) -> &[FenceEvent] {
        self.events_by_track
            .get(track_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Row counts for the loaded tables.
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            sorties: self.sorties.len(),
            fence_events: self.event_count,
            enter_events: self
                .events_by_track
                .values()
                .flatten()
                .filter(|e| e.is_enter())
                .count(),
        }
    }
}

/// Read one CSV table, header-driven.
fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|source| DatasetError::Record {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
