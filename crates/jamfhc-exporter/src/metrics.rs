//! Prometheus exposition of a sample set.
//!
//! Every scrape builds a fresh registry: the exporter holds no metric
//! state between scrapes, so stale label sets from a previous scrape
//! can never linger. The text format itself is entirely the
//! `prometheus` crate's concern.

use jamfhc_core::SampleSet;
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

/// Name of the reachability metric family.
pub const SCRAPE_UP_METRIC: &str = "jamfpro_healthcheck_scrape_url_up";

/// Name of the health-code metric family.
pub const HEALTHCODE_METRIC: &str = "jamfpro_healthcheck_healthcode";

/// Encode one scrape's samples into Prometheus text format.
///
/// `target` is the configured Jamf Pro host; it becomes the
/// `target_url` label on every sample.
pub fn encode_samples(samples: &SampleSet, target: &str) -> Result<String, prometheus::Error> {
    let registry = Registry::new();

    let scrape_up = GaugeVec::new(
        Opts::new(
            SCRAPE_UP_METRIC,
            "Status of the connection to the monitored healthCheck.html endpoint",
        ),
        &["httpcode", "target_url"],
    )?;
    let healthcode = GaugeVec::new(
        Opts::new(
            HEALTHCODE_METRIC,
            "Health code reported by the monitored healthCheck.html endpoint",
        ),
        &[
            "healthcode",
            "httpcode",
            "description",
            "description_full",
            "target_url",
        ],
    )?;
    registry.register(Box::new(scrape_up.clone()))?;
    registry.register(Box::new(healthcode.clone()))?;

    scrape_up
        .with_label_values(&[&samples.reachability.httpcode, target])
        .set(samples.reachability.value);

    for sample in &samples.health_codes {
        healthcode
            .with_label_values(&[
                &sample.healthcode,
                &sample.httpcode,
                &sample.description,
                &sample.description_full,
                target,
            ])
            .set(sample.value);
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}
