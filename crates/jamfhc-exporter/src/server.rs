//! The `/metrics` server and its lifecycle.
//!
//! The server holds only read-only state (HTTP client, settings, the
//! precomputed target URL), so overlapping scrapes from an impatient
//! Prometheus are independently safe. Shutdown is signal-driven: the
//! run loop blocks until SIGINT/SIGTERM, then drains in-flight
//! requests under a bounded deadline.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use jamfhc_core::{ExporterSettings, SampleSet};
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::metrics::encode_samples;
use crate::scrape::scrape;

/// How long in-flight scrapes get to drain after a termination signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Shared, read-only server context.
#[derive(Debug)]
pub struct ExporterContext {
    /// Client reused across scrapes. Built without a request timeout,
    /// matching the exporter's documented behavior.
    pub client: reqwest::Client,
    /// Immutable configuration from startup.
    pub settings: ExporterSettings,
    /// Target URL, computed once from the settings.
    pub target_url: String,
}

type AppState = Arc<ExporterContext>;

/// Handle one Prometheus scrape: GET the health endpoint, translate
/// the outcome into samples, and reply with the encoded text.
///
/// Never fails the scrape contract with an empty reply: an unreachable
/// target is itself a valid sample set, and only an encoding error
/// (which cannot stem from upstream data) maps to a 500.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    let outcome = scrape(&state.client, &state.target_url).await;
    let samples = SampleSet::from_outcome(&outcome);

    match encode_samples(&samples, &state.settings.host) {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the exporter router for the given context.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Run the exporter until a termination signal arrives.
///
/// Fatal conditions (invalid settings, bind failure, server error,
/// shutdown drain failure or timeout) surface as errors; the caller
/// exits nonzero on them. A clean signal-triggered drain returns
/// `Ok(())`.
pub async fn run(settings: ExporterSettings) -> anyhow::Result<()> {
    settings.validate()?;

    let target_url = settings.target_url();
    debug!(url = %target_url, "request url");

    let client = reqwest::Client::builder()
        .build()
        .context("failed to build http client")?;
    let state = Arc::new(ExporterContext {
        client,
        target_url,
        settings: settings.clone(),
    });

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "serving jamfpro healthcheck exporter");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app(state))
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // The server never stops on its own before a signal.
            return match result {
                Ok(Ok(())) => bail!("metrics server exited unexpectedly"),
                Ok(Err(err)) => Err(err).context("metrics server error"),
                Err(err) => Err(err).context("metrics server task failed"),
            };
        }
        () = shutdown_signal() => {
            info!("termination signal received, shutting down");
        }
    }

    let _ = shutdown_tx.send(());
    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(Ok(Ok(()))) => {
            info!("graceful shutdown complete");
            Ok(())
        }
        Ok(Ok(Err(err))) => Err(err).context("shutdown error"),
        Ok(Err(err)) => Err(err).context("metrics server task failed during shutdown"),
        Err(_) => bail!("graceful shutdown timed out after {SHUTDOWN_GRACE:?}"),
    }
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spin up a fixture upstream plus the exporter itself and scrape
    /// `/metrics` end to end.
    async fn serve_exporter_against_fixture(healthcode: i64) -> String {
        let upstream = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture listener");
        let upstream_addr = upstream.local_addr().expect("fixture local addr");
        tokio::spawn(async move {
            axum::serve(upstream, jamfhc_fixture::router(healthcode))
                .await
                .expect("serve fixture");
        });

        let mut settings = ExporterSettings::new(upstream_addr.to_string());
        settings.protocol = "http".to_string();

        let state = Arc::new(ExporterContext {
            client: reqwest::Client::new(),
            target_url: settings.target_url(),
            settings,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind exporter listener");
        let addr = listener.local_addr().expect("exporter local addr");
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("serve exporter");
        });

        format!("http://{addr}/metrics")
    }

    #[tokio::test]
    async fn metrics_endpoint_reports_healthy_fixture() {
        let metrics_url = serve_exporter_against_fixture(0).await;

        let body = reqwest::get(&metrics_url)
            .await
            .expect("scrape exporter")
            .text()
            .await
            .expect("read metrics body");

        assert!(body.contains("jamfpro_healthcheck_scrape_url_up"));
        assert!(body.contains(r#"httpcode="200""#));
        assert!(body.contains("jamfpro_healthcheck_healthcode"));
        assert!(body.contains(r#"healthcode="0""#));
    }

    #[tokio::test]
    async fn metrics_endpoint_reports_degraded_fixture() {
        let metrics_url = serve_exporter_against_fixture(6).await;

        let body = reqwest::get(&metrics_url)
            .await
            .expect("scrape exporter")
            .text()
            .await
            .expect("read metrics body");

        assert!(body.contains(r#"healthcode="6""#));
        assert!(body.contains(r#"description="InitializationError""#));
        assert!(body.contains(r#"httpcode="503""#));
    }
}
