//! Per-query coverage summary record.

use serde::{Deserialize, Serialize};

use crate::query::FilterSet;

/// Text carried by summaries whose filters matched no sortie rows.
pub const NO_MATCH_MESSAGE: &str = "No flights match the given filters.";

/// Aggregated answer to one coverage question. Constructed fresh per query,
/// never mutated afterwards, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Sortie rows surviving the filters
    pub flights: usize,
    /// Summed enter-event seconds across all matched flights
    pub total_airtime_sec: f64,
    /// Share of that airtime during which the sensor saw the flight
    pub detected_airtime_sec: f64,
    /// detected / total in percent, 0 when there is no airtime
    pub coverage_pct: f64,
    /// The filters that produced this summary
    pub filters_applied: FilterSet,
    /// Sensor of interest
    pub sensor: String,
    /// Human-readable note set only when no rows matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CoverageSummary {
    /// Zeroed summary for filters that matched nothing. An expected outcome,
    /// not an error: callers render the message instead of a pie.
    pub fn no_match(filters: FilterSet, sensor: impl Into<String>) -> Self {
        Self {
            flights: 0,
            total_airtime_sec: 0.0,
            detected_airtime_sec: 0.0,
            coverage_pct: 0.0,
            filters_applied: filters,
            sensor: sensor.into(),
            message: Some(NO_MATCH_MESSAGE.to_string()),
        }
    }

    /// Whether this summary is the empty-result sentinel.
    pub fn is_no_match(&self) -> bool {
        self.message.is_some()
    }

    /// Airtime not attributed to the sensor, never negative.
    pub fn undetected_airtime_sec(&self) -> f64 {
        (self.total_airtime_sec - self.detected_airtime_sec).max(0.0)
    }
}
