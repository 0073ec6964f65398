//! PayPal IPN webhook route.

use axum::{extract::Extension, http::StatusCode};
use tracing::debug;

use crate::domains::payments::process_notification;
use crate::server::app::AppState;

/// Receive an IPN message.
///
/// PayPal retries until it sees a 200, so the body is handed to a
/// background task and the acknowledgement goes out immediately.
/// Verification and charge dispatch happen after this handler returns;
/// their outcomes land in the log, never in this response.
pub async fn ipn_handler(Extension(state): Extension<AppState>, body: String) -> StatusCode {
    debug!(bytes = body.len(), "ipn notification received");

    let deps = state.deps.clone();
    tokio::spawn(async move {
        process_notification(body, &deps).await;
    });

    StatusCode::OK
}
