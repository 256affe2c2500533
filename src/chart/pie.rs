//! Two-slice coverage pie rendered to an in-memory PNG.

use std::io::Cursor;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::ChartConfig;
use crate::coverage::CoverageSummary;
use crate::error::{AircoverError, ChartError, Result};

/// Text shown when matched flights carry no enter events.
const NO_AIRTIME_MESSAGE: &str = "No airtime recorded for matching flights.";

/// Renders coverage summaries as pie charts, entirely off-screen.
///
/// Every render owns its pixel buffer and drawing area and releases them on
/// each exit path; nothing graphical outlives the call.
pub struct ChartRenderer {
    config: ChartConfig,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Render the summary as PNG bytes.
    ///
    /// Summaries with no matched rows, or with no recorded airtime, produce a
    /// placeholder image carrying the message instead of a pie; the summary
    /// contract is identical either way.
    pub fn render(&self, summary: &CoverageSummary, query: &str) -> Result<Vec<u8>> {
        let (width, height) = (self.config.width, self.config.height);
        let mut raw = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut raw, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            if let Some(message) = summary.message.as_deref() {
                draw_notice(&root, message)?;
            } else if summary.total_airtime_sec <= 0.0 {
                draw_notice(&root, NO_AIRTIME_MESSAGE)?;
            } else {
                self.draw_pie(&root, summary, query)?;
            }

            root.present().map_err(draw_err)?;
        }
        encode_png(width, height, raw)
    }

    fn draw_pie(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        summary: &CoverageSummary,
        query: &str,
    ) -> Result<()> {
        let title = format!(
            "{} Airtime Coverage for {}",
            summary.sensor,
            capitalize(query.trim())
        );
        let chart_area = root.titled(&title, ("sans-serif", 20)).map_err(draw_err)?;

        let (area_width, area_height) = chart_area.dim_in_pixel();
        let center = ((area_width / 2) as i32, (area_height / 2) as i32);
        let radius = f64::from(area_width.min(area_height)) * 0.35;

        let sizes = [
            summary.detected_airtime_sec,
            summary.undetected_airtime_sec(),
        ];
        let (dr, dg, db) = self.config.detected_rgb();
        let (ur, ug, ub) = self.config.undetected_rgb();
        let colors = [RGBColor(dr, dg, db), RGBColor(ur, ug, ub)];
        let labels = [
            format!("Detected by {}", summary.sensor),
            "Not detected".to_string(),
        ];

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 15).into_font().color(&BLACK));
        chart_area.draw(&pie).map_err(draw_err)?;
        Ok(())
    }
}

/// Centered single-line notice instead of a pie.
fn draw_notice(root: &DrawingArea<BitMapBackend<'_>, Shift>, message: &str) -> Result<()> {
    let (width, height) = root.dim_in_pixel();
    let style = ("sans-serif", 22)
        .into_font()
        .color(&RGBColor(66, 66, 66))
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        message.to_string(),
        ((width / 2) as i32, (height / 2) as i32),
        style,
    ))
    .map_err(draw_err)?;
    Ok(())
}

/// Encode the raw RGB buffer as PNG.
fn encode_png(width: u32, height: u32, raw: Vec<u8>) -> Result<Vec<u8>> {
    let img = image::RgbImage::from_raw(width, height, raw)
        .ok_or_else(|| ChartError::Encode("RGB buffer size mismatch".to_string()))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(bytes)
}

fn draw_err<E>(err: DrawingAreaErrorKind<E>) -> AircoverError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Draw(err.to_string()).into()
}

/// First letter uppercased, remainder lowercased, for the title echo.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
