//! Filter, join, and sum the loaded tables into a coverage summary.

use std::sync::Arc;

use tracing::debug;

use super::summary::CoverageSummary;
use crate::dataset::{FlightData, SortieRecord};
use crate::query::ExtractedQuery;

/// Computes coverage summaries against the shared read-only dataset.
///
/// Aggregation never fails: filters that match nothing produce the
/// empty-result summary, and malformed questions never reach this layer
/// (the extractor degrades them to an empty filter set).
pub struct CoverageAggregator {
    data: Arc<FlightData>,
}

impl CoverageAggregator {
    pub fn new(data: Arc<FlightData>) -> Self {
        Self { data }
    }

    /// Apply the filters, join matched sorties to their enter events, and
    /// sum durations into a [`CoverageSummary`].
    pub fn aggregate(&self, query: &ExtractedQuery) -> CoverageSummary {
        let matched: Vec<&SortieRecord> = self
            .data
            .sorties()
            .iter()
            .filter(|sortie| self.matches(sortie, query))
            .collect();

        if matched.is_empty() {
            debug!(filters = ?query.filters, "No sortie rows match");
            return CoverageSummary::no_match(query.filters.clone(), query.sensor.clone());
        }

        let mut total_airtime_sec = 0.0;
        let mut detected_airtime_sec = 0.0;
        for sortie in &matched {
            let detected = contains_ci(&sortie.c_uas, &query.sensor);
            for event in self.data.events_for(&sortie.rid) {
                if !event.is_enter() {
                    continue;
                }
                total_airtime_sec += event.seconds_in_range;
                if detected {
                    detected_airtime_sec += event.seconds_in_range;
                }
            }
        }

        // Detected rows are a subset of total rows, so the clamp only bites
        // if the join logic ever changes.
        let detected_airtime_sec = detected_airtime_sec.min(total_airtime_sec);
        let coverage_pct = if total_airtime_sec > 0.0 {
            detected_airtime_sec / total_airtime_sec * 100.0
        } else {
            0.0
        };

        CoverageSummary {
            flights: matched.len(),
            total_airtime_sec,
            detected_airtime_sec,
            coverage_pct,
            filters_applied: query.filters.clone(),
            sensor: query.sensor.clone(),
            message: None,
        }
    }

    /// Substring row filter. Empty column values never match.
    fn matches(&self, sortie: &SortieRecord, query: &ExtractedQuery) -> bool {
        query
            .filters
            .entries()
            .iter()
            .all(|(field, value)| contains_ci(sortie.field_value(*field), value))
    }
}

/// Case-insensitive substring test.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
