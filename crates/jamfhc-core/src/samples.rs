//! Translation of a scrape outcome into metric samples.
//!
//! A [`SampleSet`] is the full, self-contained result of one scrape:
//! exactly one reachability sample, plus zero or more health-code
//! samples. The metrics adapter turns a sample set into Prometheus
//! gauges without any further logic.

use crate::catalog::long_description;
use crate::report::{HealthReport, ScrapeOutcome};

/// Whether the last scrape reached the health endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachabilitySample {
    /// Gauge value: 1 when the endpoint answered, 0 otherwise.
    pub value: f64,
    /// `httpcode` label: the numeric HTTP status, or `""` when unreachable.
    pub httpcode: String,
}

/// One health-code gauge sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthCodeSample {
    /// Gauge value: the health code itself.
    pub value: f64,
    /// `healthcode` label.
    pub healthcode: String,
    /// `httpcode` label from the entry, or `""` for the synthetic
    /// healthy sample.
    pub httpcode: String,
    /// `description` label from the entry.
    pub description: String,
    /// `description_full` label from the catalog.
    pub description_full: String,
}

/// The fresh set of samples produced by one scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub reachability: ReachabilitySample,
    pub health_codes: Vec<HealthCodeSample>,
}

impl SampleSet {
    /// Build the sample set for a scrape outcome.
    ///
    /// Invariants: exactly one reachability sample; health-code samples
    /// are one per decoded entry, exactly one synthetic code-0 sample
    /// when the report was the empty array, and zero when the target
    /// was unreachable or the body did not decode.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // health codes are single digits
    pub fn from_outcome(outcome: &ScrapeOutcome) -> Self {
        match outcome {
            ScrapeOutcome::Unreachable => Self {
                reachability: ReachabilitySample {
                    value: 0.0,
                    httpcode: String::new(),
                },
                health_codes: Vec::new(),
            },
            ScrapeOutcome::Reached { status, report } => {
                let health_codes = match report {
                    HealthReport::Healthy => vec![HealthCodeSample {
                        value: 0.0,
                        healthcode: "0".to_string(),
                        httpcode: String::new(),
                        description: String::new(),
                        description_full: long_description(0).to_string(),
                    }],
                    HealthReport::Entries(entries) => entries
                        .iter()
                        .map(|entry| HealthCodeSample {
                            value: entry.health_code as f64,
                            healthcode: entry.health_code.to_string(),
                            httpcode: entry.http_code.to_string(),
                            description: entry.description.clone(),
                            description_full: long_description(entry.health_code).to_string(),
                        })
                        .collect(),
                };

                Self {
                    reachability: ReachabilitySample {
                        value: 1.0,
                        httpcode: status.to_string(),
                    },
                    health_codes,
                }
            }
        }
    }
}
