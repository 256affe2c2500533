//! Keyword-driven translation of free-text questions into filters.
//!
//! Matching is deterministic and order-sensitive: each field takes the first
//! keyword that hits, in fixed precedence order, and later hits for the same
//! field are ignored. There is no negation, no compounds, no synonym list
//! beyond the vocabularies below.

use std::sync::LazyLock;

use regex::Regex;

use super::filters::{ExtractedQuery, FilterSet};

/// Recognized airframes, in match-precedence order.
const PLATFORM_KEYWORDS: [&str; 11] = [
    "orb",
    "kairos",
    "fiber",
    "afo",
    "parrot",
    "quantix",
    "neros",
    "sturnas",
    "boresight",
    "mavic",
    "blimp",
];

/// Recognized sensors, in match-precedence order.
const SENSOR_KEYWORDS: [&str; 4] = ["pcl", "gotcha", "ring_5", "stardust"];

/// Sensor assumed when the question names none.
pub const DEFAULT_SENSOR: &str = "PCL";

/// Translates a free-text question into a [`FilterSet`] and a sensor of
/// interest. Pure function of the input string and the configured default
/// sensor: no randomness, no external state.
pub struct FilterExtractor {
    /// Sensor used when no sensor keyword is present
    default_sensor: String,
}

impl Default for FilterExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterExtractor {
    /// Create an extractor with the built-in default sensor.
    pub fn new() -> Self {
        Self {
            default_sensor: DEFAULT_SENSOR.to_string(),
        }
    }

    /// Create an extractor with a custom fallback sensor.
    pub fn with_default_sensor(sensor: impl Into<String>) -> Self {
        Self {
            default_sensor: sensor.into(),
        }
    }

    /// Extract filters and the sensor of interest from a question.
    ///
    /// Unrecognized or empty input degrades to an empty filter set plus the
    /// default sensor; this never fails.
    pub fn extract(&self, query: &str) -> ExtractedQuery {
        let query_lower = query.to_lowercase();

        let mut filters = FilterSet::new();
        filters.platform = extract_platform(&query_lower);
        filters.altitude = extract_altitude(&query_lower);
        filters.speed = extract_speed(&query_lower);

        let sensor = extract_sensor(&query_lower)
            .unwrap_or_else(|| self.default_sensor.to_uppercase());

        ExtractedQuery { filters, sensor }
    }
}

/// First platform keyword present as a whole word, in canonical form.
fn extract_platform(query: &str) -> Option<String> {
    PLATFORM_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(query))
        .map(|(word, _)| capitalize(word))
}

/// Altitude band, precedence high > low > medium.
fn extract_altitude(query: &str) -> Option<String> {
    if HIGH_ALTITUDE_PATTERN.is_match(query) {
        Some("High".to_string())
    } else if LOW_ALTITUDE_PATTERN.is_match(query) {
        Some("Low".to_string())
    } else if MEDIUM_ALTITUDE_PATTERN.is_match(query) {
        Some("Medium".to_string())
    } else {
        None
    }
}

/// Speed band, precedence fast > slow > medium.
fn extract_speed(query: &str) -> Option<String> {
    if FAST_SPEED_PATTERN.is_match(query) {
        Some("Fast".to_string())
    } else if SLOW_SPEED_PATTERN.is_match(query) {
        Some("Slow".to_string())
    } else if MEDIUM_SPEED_PATTERN.is_match(query) {
        Some("Medium".to_string())
    } else {
        None
    }
}

/// First sensor keyword present anywhere in the question, uppercased.
/// Sensors match as plain substrings, not whole words.
fn extract_sensor(query: &str) -> Option<String> {
    SENSOR_KEYWORDS
        .iter()
        .find(|keyword| query.contains(*keyword))
        .map(|keyword| keyword.to_uppercase())
}

/// First letter uppercased, remainder lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

static PLATFORM_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PLATFORM_KEYWORDS
        .iter()
        .map(|word| {
            let pattern = Regex::new(&format!(r"(?i)\b{word}\b")).expect("Invalid regex");
            (*word, pattern)
        })
        .collect()
});

static HIGH_ALTITUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhigh\b").expect("Invalid regex"));
static LOW_ALTITUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blow\b").expect("Invalid regex"));
static MEDIUM_ALTITUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmedium\b").expect("Invalid regex"));

static FAST_SPEED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhigh\s+speed\b|\bfast\b").expect("Invalid regex"));
static SLOW_SPEED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blow\s+speed\b|\bslow\b").expect("Invalid regex"));
static MEDIUM_SPEED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bmedium\s+speed\b").expect("Invalid regex"));
