//! Integration tests for the PayPal IPN webhook.
//!
//! POST /payments/ipn must acknowledge with 200 before anything else
//! happens; verification and the charge callback run on a background task
//! and are observed here through the recording mocks.

mod common;

use crate::common::{post_form, settle, test_app, wait_until};
use axum::http::StatusCode;

const COMPLETED_BODY: &str = "payment_status=Completed&custom=tok123&txn_id=TXN1&mc_gross=25.00";

#[tokio::test]
async fn webhook_acknowledges_verified_notification() {
    let ctx = test_app();
    ctx.deps.gateway.set_verified(true);

    let status = post_form(&ctx.app, "/payments/ipn", COMPLETED_BODY).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn verified_completed_payment_triggers_charge() {
    let ctx = test_app();
    ctx.deps.gateway.set_verified(true);

    post_form(&ctx.app, "/payments/ipn", COMPLETED_BODY).await;

    wait_until(|| ctx.deps.charges.was_charged("tok123", "TXN1")).await;
    assert_eq!(ctx.deps.charges.charge_count(), 1);

    // The gateway saw the raw body exactly as PayPal sent it
    assert_eq!(ctx.deps.gateway.calls(), vec![COMPLETED_BODY.to_string()]);
}

#[tokio::test]
async fn rejected_notification_is_acknowledged_but_not_charged() {
    let ctx = test_app();
    ctx.deps.gateway.set_verified(false);

    let status = post_form(&ctx.app, "/payments/ipn", COMPLETED_BODY).await;

    assert_eq!(status, StatusCode::OK);

    wait_until(|| ctx.deps.gateway.call_count() == 1).await;
    settle().await;
    assert_eq!(ctx.deps.charges.charge_count(), 0);
}

#[tokio::test]
async fn non_completed_payment_is_not_charged() {
    let ctx = test_app();
    ctx.deps.gateway.set_verified(true);

    let status = post_form(
        &ctx.app,
        "/payments/ipn",
        "payment_status=Pending&custom=tok123&txn_id=TXN1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    wait_until(|| ctx.deps.gateway.call_count() == 1).await;
    settle().await;
    assert_eq!(ctx.deps.charges.charge_count(), 0);
}

#[tokio::test]
async fn gateway_outage_never_reaches_the_caller() {
    let ctx = test_app();
    ctx.deps.gateway.set_failing(true);

    // The 200 went out before verification was even attempted
    let status = post_form(&ctx.app, "/payments/ipn", COMPLETED_BODY).await;

    assert_eq!(status, StatusCode::OK);

    wait_until(|| ctx.deps.gateway.call_count() == 1).await;
    settle().await;
    assert_eq!(ctx.deps.charges.charge_count(), 0);
}

#[tokio::test]
async fn completed_payment_without_correlation_token_is_not_charged() {
    let ctx = test_app();
    ctx.deps.gateway.set_verified(true);

    let status = post_form(
        &ctx.app,
        "/payments/ipn",
        "payment_status=Completed&txn_id=TXN1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    wait_until(|| ctx.deps.gateway.call_count() == 1).await;
    settle().await;
    assert_eq!(ctx.deps.charges.charge_count(), 0);
}
