//! The upstream health report: JSON model and body parsing.
//!
//! `healthCheck.html` returns either the literal empty array `[]`
//! (server healthy) or a JSON array of health entries. Parsing is
//! deliberately forgiving: a malformed body is logged and yields an
//! empty entry list rather than failing the scrape.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// One entry of the `healthCheck.html` JSON array.
///
/// Immutable once decoded; scoped to a single scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    /// Jamf Pro health code (0-6).
    pub health_code: i64,
    /// HTTP status the Jamf Pro server associates with the condition.
    pub http_code: i64,
    /// Short machine-oriented description, e.g. `DBConnectionError`.
    pub description: String,
}

/// Parsed form of a `healthCheck.html` response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    /// The body was the literal empty array: no problem detected.
    Healthy,
    /// Decoded entries. Empty when the body failed to decode.
    Entries(Vec<HealthEntry>),
}

/// Result of one scrape attempt against the health endpoint.
///
/// Transient, per-invocation; never stored across scrapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Transport-level failure: connection refused, DNS failure, timeout.
    Unreachable,
    /// The endpoint answered with `status` and the given report.
    Reached {
        status: u16,
        report: HealthReport,
    },
}

/// Parse a `healthCheck.html` response body.
///
/// Spaces and a single trailing newline are ignored when checking for
/// the literal `[]`. A body that is not `[]` and does not decode as a
/// JSON array of [`HealthEntry`] is logged together with its raw text
/// and treated as zero entries; parsing never fails the caller.
#[must_use]
pub fn parse_health_body(body: &[u8]) -> HealthReport {
    let text = String::from_utf8_lossy(body);
    let compact = text.replace(' ', "");
    let compact = compact.strip_suffix('\n').unwrap_or(&compact);
    if compact == "[]" {
        return HealthReport::Healthy;
    }

    match serde_json::from_slice::<Vec<HealthEntry>>(body) {
        Ok(entries) => HealthReport::Entries(entries),
        Err(err) => {
            error!(error = %err, "failed to decode health report body");
            info!(body = %text, "undecodable health report body");
            HealthReport::Entries(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_healthy() {
        assert_eq!(parse_health_body(b"[]"), HealthReport::Healthy);
    }

    #[test]
    fn empty_array_with_whitespace_and_newline_is_healthy() {
        assert_eq!(parse_health_body(b"[]\n"), HealthReport::Healthy);
        assert_eq!(parse_health_body(b"[ ]"), HealthReport::Healthy);
        assert_eq!(parse_health_body(b" [ ] \n"), HealthReport::Healthy);
    }

    #[test]
    fn single_entry_decodes() {
        let body = br#"[{"healthCode":3,"httpCode":503,"description":"DBConnectionConfigError"}]"#;

        let report = parse_health_body(body);
        assert_eq!(
            report,
            HealthReport::Entries(vec![HealthEntry {
                health_code: 3,
                http_code: 503,
                description: "DBConnectionConfigError".to_string(),
            }])
        );
    }

    #[test]
    fn multiple_entries_decode_in_order() {
        let body = br#"[
            {"healthCode":2,"httpCode":200,"description":"SetupAssistant"},
            {"healthCode":6,"httpCode":503,"description":"InitializationError"}
        ]"#;

        let HealthReport::Entries(entries) = parse_health_body(body) else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].health_code, 2);
        assert_eq!(entries[1].description, "InitializationError");
    }

    #[test]
    fn malformed_body_yields_zero_entries() {
        assert_eq!(
            parse_health_body(b"not json"),
            HealthReport::Entries(Vec::new())
        );
    }

    #[test]
    fn empty_body_yields_zero_entries() {
        // An empty body is not the literal `[]`, so it goes through the
        // decoder and fails there.
        assert_eq!(parse_health_body(b""), HealthReport::Entries(Vec::new()));
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = HealthEntry {
            health_code: 5,
            http_code: 503,
            description: "ChildNodeStartUpError".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""healthCode":5"#));
        assert!(json.contains(r#""httpCode":503"#));

        let decoded: HealthEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
