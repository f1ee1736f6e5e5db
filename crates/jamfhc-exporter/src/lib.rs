//! Adapters for the Jamf Pro health-check exporter.
//!
//! Wires the pure logic in `jamfhc-core` to the outside world: a
//! reqwest scraper for the upstream health endpoint, Prometheus text
//! encoding of the resulting samples, and the axum server exposing
//! them on `/metrics`.

pub mod metrics;
pub mod scrape;
pub mod server;

pub use metrics::encode_samples;
pub use scrape::scrape;
pub use server::{ExporterContext, run};
