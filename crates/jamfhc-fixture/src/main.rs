//! Entry point for the stub health-check server.

use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Stub Jamf Pro server answering `/healthCheck.html` with a fixed
/// health code, for testing the jamfpro healthcheck exporter.
#[derive(Parser, Debug)]
#[command(name = "jamfhc-fixture", version)]
struct Cli {
    /// IP address for the service to listen on
    #[arg(long, env = "JAMFHC_FIXTURE_LISTEN_ADDRESS", default_value = "0.0.0.0")]
    listen_address: String,

    /// Port the service will listen on
    #[arg(long, env = "JAMFHC_FIXTURE_LISTEN_PORT", default_value_t = 8081)]
    listen_port: u16,

    /// Health code to serve [0 - 6]; anything else serves the empty array
    #[arg(long, env = "JAMFHC_FIXTURE_HEALTHCODE", default_value_t = 0)]
    healthcode: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let addr = format!("{}:{}", cli.listen_address, cli.listen_port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, healthcode = cli.healthcode, "serving health code on /healthCheck.html");

    axum::serve(listener, jamfhc_fixture::router(cli.healthcode))
        .await
        .context("fixture server error")
}
