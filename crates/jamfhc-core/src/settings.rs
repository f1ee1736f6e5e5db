//! Exporter settings and validation.
//!
//! Settings are built once at startup from the CLI surface and passed
//! into the exporter by value. There is no process-global mutable
//! configuration; the target URL is derived from these fields and
//! never recomputed differently per scrape.

use thiserror::Error;

/// Default address the metrics endpoint listens on.
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";

/// Default port the metrics endpoint listens on.
pub const DEFAULT_LISTEN_PORT: u16 = 9613;

/// Default protocol used to reach the monitored Jamf Pro server.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Fixed path of the Jamf Pro health-check page.
pub const HEALTH_CHECK_PATH: &str = "/healthCheck.html";

/// Settings validation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// No Jamf Pro host was configured.
    #[error("a Jamf Pro host to monitor must be provided")]
    MissingHost,
}

/// Immutable exporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterSettings {
    /// Address the metrics endpoint listens on.
    pub listen_address: String,
    /// Port the metrics endpoint listens on.
    pub listen_port: u16,
    /// Protocol (`http` or `https`) used to reach the Jamf Pro server.
    pub protocol: String,
    /// Hostname of the monitored Jamf Pro server, e.g. `jamf.example.com`.
    pub host: String,
}

impl ExporterSettings {
    /// Create settings for `host` with all defaults.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: host.into(),
        }
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.host.is_empty() {
            return Err(SettingsError::MissingHost);
        }
        Ok(())
    }

    /// Full URL of the monitored health-check page.
    #[must_use]
    pub fn target_url(&self) -> String {
        format!("{}://{}{}", self.protocol, self.host, HEALTH_CHECK_PATH)
    }

    /// `address:port` the metrics endpoint binds to.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_address, self.listen_port)
    }
}
