//! Structured filters extracted from a free-text question.

use serde::{Deserialize, Serialize};

/// Sortie columns a question can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Platform,
    Altitude,
    Speed,
}

impl FilterField {
    /// Column name in the sortie mapping table.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Platform => "Platform",
            Self::Altitude => "Altitude",
            Self::Speed => "Speed",
        }
    }
}

/// Row-inclusion constraints on the sortie table, at most one value per
/// field. Values are matched against column contents as case-insensitive
/// substrings, not equality: a "High" filter also retains "High-Alt" rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_altitude(mut self, altitude: impl Into<String>) -> Self {
        self.altitude = Some(altitude.into());
        self
    }

    pub fn with_speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = Some(speed.into());
        self
    }

    /// True when no field is constrained (the whole table matches).
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.altitude.is_none() && self.speed.is_none()
    }

    /// Number of constrained fields.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Populated constraints in fixed field order.
    pub fn entries(&self) -> Vec<(FilterField, &str)> {
        let mut entries = Vec::new();
        if let Some(platform) = self.platform.as_deref() {
            entries.push((FilterField::Platform, platform));
        }
        if let Some(altitude) = self.altitude.as_deref() {
            entries.push((FilterField::Altitude, altitude));
        }
        if let Some(speed) = self.speed.as_deref() {
            entries.push((FilterField::Speed, speed));
        }
        entries
    }
}

/// A fully translated question: row filters plus the sensor of interest.
///
/// The sensor is not a row filter. It selects which share of the matched and
/// joined airtime counts as detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQuery {
    pub filters: FilterSet,
    pub sensor: String,
}
