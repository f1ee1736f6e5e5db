//! Argument parsing for the exporter binary.

use clap::Parser;

use jamfhc_core::{
    DEFAULT_LISTEN_ADDRESS, DEFAULT_LISTEN_PORT, DEFAULT_PROTOCOL, ExporterSettings,
};

const METRICS_EXAMPLE: &str = "\
Metrics example:
  jamfpro_healthcheck_healthcode{description=\"\",description_full=\"\",healthcode=\"\",httpcode=\"\",target_url=\"\"} 0
  jamfpro_healthcheck_scrape_url_up{httpcode=\"\",target_url=\"\"} 0";

/// Reach out to a Jamf Pro server's healthCheck.html page and expose
/// the result as Prometheus metrics on /metrics.
#[derive(Parser, Debug)]
#[command(name = "jamfhc-exporter", version, after_help = METRICS_EXAMPLE)]
pub struct Cli {
    /// IP address for this service to listen on
    #[arg(long, env = "JAMFHC_LISTEN_ADDRESS", default_value = DEFAULT_LISTEN_ADDRESS)]
    pub listen_address: String,

    /// Port that this service will listen on
    #[arg(long, env = "JAMFHC_LISTEN_PORT", default_value_t = DEFAULT_LISTEN_PORT)]
    pub listen_port: u16,

    /// Protocol used to interact with the monitored Jamf Pro server
    #[arg(long, env = "JAMFHC_JAMF_PROTO", default_value = DEFAULT_PROTOCOL)]
    pub jamf_proto: String,

    /// Jamf Pro host to be monitored (e.g. jamf.example.com)
    #[arg(long, env = "JAMFHC_JAMF_URL")]
    pub jamf_url: String,

    /// Enable debug output
    #[arg(long, env = "JAMFHC_DEBUG")]
    pub debug: bool,

    /// Enable ANSI colors in log output (prettier when developing in debug mode)
    #[arg(long, env = "JAMFHC_ENABLE_COLOR_LOGS")]
    pub enable_color_logs: bool,
}

impl Cli {
    /// Build the immutable exporter settings from the parsed flags.
    #[must_use]
    pub fn settings(&self) -> ExporterSettings {
        ExporterSettings {
            listen_address: self.listen_address.clone(),
            listen_port: self.listen_port,
            protocol: self.jamf_proto.clone(),
            host: self.jamf_url.clone(),
        }
    }
}
