//! Core entry point: one question in, chart bytes and summary out.

use std::sync::Arc;

use tracing::info;

use crate::chart::{png_data_uri, ChartRenderer};
use crate::config::Config;
use crate::coverage::{CoverageAggregator, CoverageSummary};
use crate::dataset::FlightData;
use crate::error::Result;
use crate::query::FilterExtractor;

/// Answer to one coverage question.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// Rendered pie chart (or placeholder) as PNG bytes
    pub image_png: Vec<u8>,
    /// The aggregate figures behind the chart
    pub summary: CoverageSummary,
}

impl QueryResponse {
    /// The chart as a `data:image/png;base64,...` URI.
    pub fn data_uri(&self) -> String {
        png_data_uri(&self.image_png)
    }
}

/// Wires extractor, aggregator, and renderer over the shared dataset.
///
/// Stateless per call: every question computes into private locals, so one
/// engine can serve queries from multiple threads against the same tables.
pub struct CoverageEngine {
    extractor: FilterExtractor,
    aggregator: CoverageAggregator,
    renderer: ChartRenderer,
}

impl CoverageEngine {
    pub fn new(config: &Config, data: Arc<FlightData>) -> Self {
        Self {
            extractor: FilterExtractor::with_default_sensor(&config.query.default_sensor),
            aggregator: CoverageAggregator::new(data),
            renderer: ChartRenderer::new(config.chart.clone()),
        }
    }

    /// Answer a free-text coverage question.
    ///
    /// Questions that match nothing still succeed and carry the no-match
    /// placeholder chart; only rendering failures propagate as errors.
    pub fn ask(&self, query: &str) -> Result<QueryResponse> {
        let extracted = self.extractor.extract(query);
        info!(filters = ?extracted.filters, sensor = %extracted.sensor, "Applying filters");

        let summary = self.aggregator.aggregate(&extracted);
        info!(
            flights = summary.flights,
            total_airtime_sec = summary.total_airtime_sec,
            detected_airtime_sec = summary.detected_airtime_sec,
            coverage_pct = summary.coverage_pct,
            "Coverage computed"
        );

        let image_png = self.renderer.render(&summary, query)?;
        Ok(QueryResponse { image_png, summary })
    }
}
