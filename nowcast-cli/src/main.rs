//! Nowcast CLI - terminal access to the rainfall nowcast API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nowcast-cli",
    version,
    about = "Rainfall nowcast API toolkit"
)]
struct Cli {
    /// API base URL (falls back to $NOWCAST_API_URL, then localhost:8000)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: nowcast_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let api_url = cli
        .api_url
        .or_else(|| std::env::var("NOWCAST_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    nowcast_cmd::run(&api_url, cli.command).await
}
