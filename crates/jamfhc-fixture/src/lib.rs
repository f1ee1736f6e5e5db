//! Stub Jamf Pro health-check server.
//!
//! Serves a fixed, canned `healthCheck.html` response chosen at
//! startup. Exists only to exercise the exporter manually and in
//! tests; it has no production role.

use axum::Router;
use axum::routing::get;

/// The canned `healthCheck.html` body for a health code.
///
/// Codes 1-6 return a one-entry JSON array with the status and short
/// description Jamf Pro would report for that condition; anything else
/// (including 0) returns the literal empty array.
#[must_use]
pub const fn canned_response(healthcode: i64) -> &'static str {
    match healthcode {
        1 => "[{\"healthCode\":1,\"httpCode\":503,\"description\":\"DBConnectionError\"}]\n",
        2 => "[{\"healthCode\":2,\"httpCode\":200,\"description\":\"SetupAssistant\"}]\n",
        3 => "[{\"healthCode\":3,\"httpCode\":503,\"description\":\"DBConnectionConfigError\"}]\n",
        4 => "[{\"healthCode\":4,\"httpCode\":503,\"description\":\"Initializing\"}]\n",
        5 => "[{\"healthCode\":5,\"httpCode\":503,\"description\":\"ChildNodeStartUpError\"}]\n",
        6 => "[{\"healthCode\":6,\"httpCode\":503,\"description\":\"InitializationError\"}]\n",
        _ => "[]\n",
    }
}

/// Router serving the canned response on `/healthCheck.html`.
#[must_use]
pub fn router(healthcode: i64) -> Router {
    Router::new().route(
        "/healthCheck.html",
        get(move || async move { canned_response(healthcode) }),
    )
}
