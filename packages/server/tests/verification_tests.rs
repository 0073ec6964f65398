//! Integration tests for the email verification link.
//!
//! GET /members/verify/:hash must flip the member's verified flag exactly
//! once and answer repeat clicks identically.

mod common;

use crate::common::{request_json, test_app};
use axum::http::StatusCode;
use serde_json::json;

async fn register_and_grab_hash(ctx: &crate::common::TestApp) -> String {
    let (status, _) = request_json(
        &ctx.app,
        "POST",
        "/register",
        Some(json!({
            "firstName": "Iris",
            "lastName": "Nguyen",
            "email": "iris@example.org",
            "primaryPhoneNumber": "0400 000 000",
            "membershipType": "full"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    ctx.deps.members.all()[0].verification_hash.clone()
}

#[tokio::test]
async fn verify_flips_flag_and_returns_record() {
    let ctx = test_app();
    let hash = register_and_grab_hash(&ctx).await;

    let (status, body) =
        request_json(&ctx.app, "GET", &format!("/members/verify/{hash}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "iris@example.org");
    assert_eq!(body["verified"], true);

    assert!(ctx.deps.members.all()[0].verified);
    assert_eq!(ctx.deps.members.mark_verified_calls(), 1);
}

#[tokio::test]
async fn verify_is_idempotent_with_a_single_store_write() {
    let ctx = test_app();
    let hash = register_and_grab_hash(&ctx).await;

    let (first_status, first_body) =
        request_json(&ctx.app, "GET", &format!("/members/verify/{hash}"), None).await;
    let (second_status, second_body) =
        request_json(&ctx.app, "GET", &format!("/members/verify/{hash}"), None).await;

    // The second click looks exactly like the first
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);

    // But only the first one wrote anything
    assert_eq!(ctx.deps.members.mark_verified_calls(), 1);
}

#[tokio::test]
async fn verify_unknown_hash_is_a_generic_failure() {
    let ctx = test_app();
    register_and_grab_hash(&ctx).await;

    let (status, body) = request_json(
        &ctx.app,
        "GET",
        "/members/verify/0000000000000000000000000000000000000000000000000000000000000000",
        None,
    )
    .await;

    // The response does not reveal whether the hash exists
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "member could not be verified");
    assert_eq!(ctx.deps.members.mark_verified_calls(), 0);
}
