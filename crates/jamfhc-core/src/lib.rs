//! Core domain logic for the Jamf Pro health-check exporter.
//!
//! Everything in this crate is pure: the health-code catalog, the
//! `healthCheck.html` body parsing, and the translation of a scrape
//! outcome into metric samples. No HTTP, no async, no shared state.

pub mod catalog;
pub mod report;
pub mod samples;
pub mod settings;

// Re-export commonly used types for convenience
pub use catalog::long_description;
pub use report::{HealthEntry, HealthReport, ScrapeOutcome, parse_health_body};
pub use samples::{HealthCodeSample, ReachabilitySample, SampleSet};
pub use settings::{
    DEFAULT_LISTEN_ADDRESS, DEFAULT_LISTEN_PORT, DEFAULT_PROTOCOL, ExporterSettings, SettingsError,
};
