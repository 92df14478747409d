//! Cleanup Cost CLI
//!
//! Command-line front end for the cleanup cost model: enrich CSV files,
//! print reports, export map data and generate synthetic datasets.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cleanup-cost", version, about = "Estimate the cost of coastal cleanup events")]
struct Cli {
    /// JSON file overriding any of the default cost rates.
    /// Cost columns already stored in an input are recomputed with these rates
    #[arg(long, global = true, value_name = "FILE")]
    rates: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cost breakdown of the reference cleanup event
    Sample {
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic global cleanup dataset
    Generate {
        /// Destination CSV
        #[arg(short, long, default_value = "data/global_ocean_cleanup_data.csv")]
        output: PathBuf,

        /// Generator config as JSON; flags below override it
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,

        /// Latest cleanup date (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        reference_date: Option<chrono::NaiveDate>,

        /// Only generate these countries
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,

        /// Also write an enriched copy next to the output
        #[arg(long)]
        with_costs: bool,
    },

    /// Append cost columns to a cleanup CSV
    Annotate {
        input: PathBuf,

        /// Defaults to `<input stem>_with_costs.csv`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the dataset cost summary
    Report {
        input: PathBuf,

        /// Number of countries listed by total cost
        #[arg(long, default_value_t = 15)]
        top: usize,

        /// Write the per-country analysis as CSV
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Show per-point costs, or search points by country
    Points {
        input: PathBuf,

        /// Number of point cards to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Case-insensitive country search
        #[arg(long, value_name = "COUNTRY")]
        search: Option<String>,
    },

    /// Check GPS validity and data coverage of a dataset
    Verify { input: PathBuf },

    /// Export map markers (GeoJSON) and heat points (JSON)
    Map {
        input: PathBuf,

        #[arg(short, long, default_value = "maps/cleanup_cost_markers.geojson")]
        output: PathBuf,

        #[arg(long, value_name = "FILE")]
        heat: Option<PathBuf>,
    },

    /// Re-sample coordinates from each row's country and zone
    Relocate {
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate format prints the whole context chain
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
