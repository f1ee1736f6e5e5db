//! One scrape cycle against the upstream health endpoint.
//!
//! A scrape is a single GET with no retry and no explicit request
//! timeout: if the monitored server hangs, the scrape blocks for that
//! request only. This mirrors the documented behavior of the exporter
//! and is a known limitation, not something to paper over here.

use jamfhc_core::{ScrapeOutcome, parse_health_body};
use reqwest::{Client, Response};
use tracing::{debug, error, warn};

/// Perform one scrape of `target_url`.
///
/// Transport-level failures (connection refused, DNS, TLS) yield
/// [`ScrapeOutcome::Unreachable`]; any HTTP response, whatever its
/// status, counts as reached. A failure while reading the body is
/// logged and parsing continues with whatever bytes were received.
pub async fn scrape(client: &Client, target_url: &str) -> ScrapeOutcome {
    debug!(url = target_url, "scraping health endpoint");

    let response = match client.get(target_url).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, url = target_url, "health endpoint unreachable");
            return ScrapeOutcome::Unreachable;
        }
    };

    let status = response.status().as_u16();
    debug!(status, "health endpoint reached");

    let body = read_body(response).await;
    let report = parse_health_body(&body);

    ScrapeOutcome::Reached { status, report }
}

/// Read the full response body, keeping partial bytes on a mid-read error.
async fn read_body(mut response: Response) -> Vec<u8> {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(err) => {
                error!(error = %err, "failed to read health response body, continuing with partial body");
                break;
            }
        }
    }
    body
}
