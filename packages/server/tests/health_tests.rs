//! Integration test for the health endpoint.
//!
//! The harness pool points at a closed port, so the endpoint must report
//! the database as down and answer 503.

mod common;

use crate::common::{request_json, test_app};
use axum::http::StatusCode;

#[tokio::test]
async fn health_reports_unreachable_database() {
    let ctx = test_app();

    let (status, body) = request_json(&ctx.app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["status"], "error");

    // The event stream side is wired regardless of the database
    assert_eq!(body["event_stream"]["status"], "ok");
    assert_eq!(body["event_stream"]["subject"], "membership.events");
}
