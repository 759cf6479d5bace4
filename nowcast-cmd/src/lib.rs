//! Command implementations for the nowcast CLI.
//!
//! Terminal access to the same API the front-end apps consume - point and
//! route forecasts, station listing, search statistics, and pipeline
//! monitoring - for deployment verification and quick checks.

use clap::Subcommand;
use nowcast_api::ApiClient;

pub mod forecast;
pub mod monitor;

#[derive(Subcommand)]
pub enum Command {
    /// Request a point forecast for a coordinate or a named location
    Predict {
        /// Latitude (requires --lon)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude (requires --lat)
        #[arg(long)]
        lon: Option<f64>,

        /// Location name (a coordinate, when given, wins over this)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Resolve a free-text query as a route forecast
    Path {
        /// Route description, e.g. "North-South Corridor"
        query: String,
    },

    /// List all sensor stations
    Stations,

    /// Show the most popular search queries
    Popular,

    /// Show the pipeline overview document
    Overview,

    /// Tail a pipeline log (download, training, sync)
    Logs {
        kind: String,

        /// Number of lines to fetch
        #[arg(long, default_value_t = 100)]
        lines: u32,
    },
}

pub async fn run(api_url: &str, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url)?;
    match command {
        Command::Predict { lat, lon, location } => {
            forecast::run_predict(&client, lat, lon, location).await
        }
        Command::Path { query } => forecast::run_path(&client, &query).await,
        Command::Stations => forecast::run_stations(&client).await,
        Command::Popular => forecast::run_popular(&client).await,
        Command::Overview => monitor::run_overview(&client).await,
        Command::Logs { kind, lines } => monitor::run_logs(&client, &kind, lines).await,
    }
}
