//! Configuration settings for the aircover pipeline.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub query: QueryConfig,
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            query: QueryConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("aircover.toml"),
            PathBuf::from("config.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("aircover/config.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".aircover/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(
                ConfigError::Invalid("chart dimensions must be > 0".to_string()).into(),
            );
        }
        if parse_hex_color(&self.chart.detected_color).is_none() {
            return Err(ConfigError::Invalid(format!(
                "chart.detected_color is not a #rrggbb color: {}",
                self.chart.detected_color
            ))
            .into());
        }
        if parse_hex_color(&self.chart.undetected_color).is_none() {
            return Err(ConfigError::Invalid(format!(
                "chart.undetected_color is not a #rrggbb color: {}",
                self.chart.undetected_color
            ))
            .into());
        }
        if self.query.default_sensor.trim().is_empty() {
            return Err(
                ConfigError::Invalid("query.default_sensor must not be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Locations of the two source tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV with one row per sortie: RID, Platform, Altitude, Speed, c_uas
    pub sortie_mapping: String,
    /// CSV with one row per fence crossing: track_id, event_type, seconds_in_range
    pub fixed_fences: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sortie_mapping: "data/sortie_mapping.csv".to_string(),
            fixed_fences: "data/fixed_fences.csv".to_string(),
        }
    }
}

impl DataConfig {
    /// Expanded path to the sortie mapping table.
    pub fn sortie_mapping_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.sortie_mapping).as_ref())
    }

    /// Expanded path to the fence events table.
    pub fn fixed_fences_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.fixed_fences).as_ref())
    }
}

/// Query parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Sensor assumed when the question names none.
    pub default_sensor: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_sensor: "PCL".to_string(),
        }
    }
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Slice color for detected airtime (#rrggbb)
    pub detected_color: String,
    /// Slice color for undetected airtime (#rrggbb)
    pub undetected_color: String,
}

const DEFAULT_DETECTED_RGB: (u8, u8, u8) = (0x66, 0xb3, 0xff);
const DEFAULT_UNDETECTED_RGB: (u8, u8, u8) = (0xff, 0x99, 0x99);

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            detected_color: "#66b3ff".to_string(),
            undetected_color: "#ff9999".to_string(),
        }
    }
}

impl ChartConfig {
    /// Detected-slice color as RGB. Falls back to the built-in default when
    /// the configured string is unparseable (validation rejects that at load,
    /// so the fallback only matters for hand-built configs).
    pub fn detected_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.detected_color).unwrap_or(DEFAULT_DETECTED_RGB)
    }

    /// Undetected-slice color as RGB.
    pub fn undetected_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.undetected_color).unwrap_or(DEFAULT_UNDETECTED_RGB)
    }
}

/// Parse a `#rrggbb` string into an RGB triple.
fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
