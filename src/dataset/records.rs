//! Row types for the sortie mapping and fence-event tables.

use serde::{Deserialize, Serialize};

use crate::query::FilterField;

/// One recorded flight with its categorical metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortieRecord {
    /// Identifier, join key against fence events
    #[serde(rename = "RID")]
    pub rid: String,
    /// Airframe category (Orb, Mavic, ...)
    #[serde(rename = "Platform")]
    pub platform: String,
    /// Altitude band (High, Medium, Low)
    #[serde(rename = "Altitude")]
    pub altitude: String,
    /// Speed band (Fast, Medium, Slow)
    #[serde(rename = "Speed")]
    pub speed: String,
    /// Sensor that detected this flight, empty when undetected
    #[serde(rename = "c_uas")]
    pub c_uas: String,
}

impl SortieRecord {
    /// Column value for a filterable field.
    pub fn field_value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Platform => &self.platform,
            FilterField::Altitude => &self.altitude,
            FilterField::Speed => &self.speed,
        }
    }
}

/// One geofence crossing recorded for a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceEvent {
    /// Foreign key into [`SortieRecord::rid`]
    pub track_id: String,
    /// Crossing type; only "enter" rows carry a countable dwell duration
    pub event_type: String,
    /// Seconds spent inside the fence for this crossing
    pub seconds_in_range: f64,
}

impl FenceEvent {
    /// Whether this crossing counts toward airtime.
    pub fn is_enter(&self) -> bool {
        self.event_type.eq_ignore_ascii_case("enter")
    }
}
