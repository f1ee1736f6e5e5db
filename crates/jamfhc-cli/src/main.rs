//! Exporter entry point - the composition root.
//!
//! Parses flags, configures logging, builds the immutable settings,
//! and hands control to the exporter's run loop. Fatal errors (invalid
//! settings, bind failure, shutdown failure) propagate out of main for
//! a nonzero exit.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jamfhc_cli::Cli;

fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.enable_color_logs)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);
    if cli.debug {
        debug!("log level: debug");
    }

    let settings = cli.settings();
    settings.validate()?;

    jamfhc_exporter::run(settings).await
}
