use clap::Parser;

use boatrace_cli::fetch::fetch;
use boatrace_cli::openapi::{OpenApiClient, OpenApiConfig};

/// Fetch race data from the Boatrace Open API.
#[derive(Parser, Debug)]
#[command(name = "boatrace-cli", version, about)]
struct Cli {
    /// Endpoint type: programs, results, or previews
    endpoint: String,

    /// Year (e.g. 2025)
    yyyy: String,

    /// Date in YYYYMMDD format (e.g. 20251222)
    yyyymmdd: String,

    /// Filter by race stadium number (1-24)
    #[arg(long)]
    stadium: Option<i64>,

    /// Filter by race number (1-12)
    #[arg(long)]
    race: Option<i64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client =
        OpenApiClient::new(OpenApiConfig::new()).expect("Failed to create Open API client");

    let document = fetch(
        &client,
        &cli.endpoint,
        &cli.yyyy,
        &cli.yyyymmdd,
        cli.stadium,
        cli.race,
    )
    .await;

    // Success or error, the outcome is the printed document; the exit
    // code stays 0 either way.
    println!(
        "{}",
        serde_json::to_string_pretty(&document).expect("Failed to serialize document")
    );
}
