//! Aircover CLI entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use aircover::{Config, CoverageEngine, CoverageSummary, FlightData};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Aircover: Airtime Coverage Explorer
#[derive(Parser, Debug)]
#[command(name = "aircover")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer a coverage question and render the pie chart
    Ask {
        /// Free-text question, e.g. "high altitude slow speed orb flights detected by pcl"
        query: String,
        /// Where to write the rendered chart
        #[arg(short, long, default_value = "coverage.png")]
        output: PathBuf,
        /// Also print the chart as a base64 data URI
        #[arg(long)]
        data_uri: bool,
    },
    /// Show loaded dataset statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    // Both tables load before any query runs; a load failure ends the
    // process here.
    let data = Arc::new(FlightData::load(&config.data)?);

    match args.command {
        Command::Ask {
            query,
            output,
            data_uri,
        } => {
            let engine = CoverageEngine::new(&config, data);
            let response = engine.ask(&query)?;
            std::fs::write(&output, &response.image_png)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&response.summary)?);
            } else {
                print_summary(&response.summary, &output);
            }
            if data_uri {
                println!("{}", response.data_uri());
            }
        }
        Command::Stats => {
            let stats = data.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Sorties: {}", stats.sorties);
                println!("Fence events: {}", stats.fence_events);
                println!("Enter events: {}", stats.enter_events);
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &CoverageSummary, output: &Path) {
    if let Some(message) = &summary.message {
        println!("{message}");
    }
    println!("Flights found: {}", summary.flights);
    println!("Total airtime: {:.1}s", summary.total_airtime_sec);
    println!(
        "{}-detected airtime: {:.1}s",
        summary.sensor, summary.detected_airtime_sec
    );
    println!("Coverage: {:.2}%", summary.coverage_pct);
    println!("Chart written to {}", output.display());
}
