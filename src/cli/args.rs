use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_CLUSTER_COUNT;

#[derive(Parser)]
#[command(name = "aeroguard")]
#[command(about = "Air-quality monitoring: WAQI ingestion, health classification and forecasting")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "WAQI API token (overrides settings)")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search monitoring stations by keyword
    Search {
        #[arg(short, long, help = "City or place name")]
        keyword: String,
    },

    /// Assess one station: EPA/WHO classification, advice and forecast
    Assess {
        #[arg(short, long, help = "Station uid from a previous search")]
        station: i64,

        #[arg(short, long, help = "Age for personalized advice")]
        age: Option<u32>,

        #[arg(long, default_value = "false", help = "Skip the 6-hour forecast")]
        no_forecast: bool,
    },

    /// Assess the station nearest to a coordinate
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(short, long, help = "Age for personalized advice")]
        age: Option<u32>,
    },

    /// Cluster area readings around a coordinate into severity levels
    Area {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(
            short,
            long,
            help = "Bounding box half-width in degrees [default: settings map_delta]"
        )]
        delta: Option<f64>,

        #[arg(short, long, default_value_t = DEFAULT_CLUSTER_COUNT)]
        clusters: usize,
    },
}
