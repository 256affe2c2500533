//! Aircover: Airtime Coverage Explorer
//!
//! Answers free-text questions about drone-flight sensor coverage by
//! translating the question into row filters, aggregating fence-crossing
//! durations over the loaded sortie tables, and rendering the result as a
//! two-slice pie chart.

pub mod chart;
pub mod config;
pub mod coverage;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod query;

pub use chart::{png_data_uri, ChartRenderer};
pub use config::{ChartConfig, Config, DataConfig, QueryConfig};
pub use coverage::{CoverageAggregator, CoverageSummary, NO_MATCH_MESSAGE};
pub use dataset::{DatasetStats, FenceEvent, FlightData, SortieRecord};
pub use engine::{CoverageEngine, QueryResponse};
pub use error::{AircoverError, ChartError, ConfigError, DatasetError, Result};
pub use query::{ExtractedQuery, FilterExtractor, FilterField, FilterSet, DEFAULT_SENSOR};
