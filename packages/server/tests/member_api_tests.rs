//! Integration tests for member signup, update, and listing.
//!
//! - POST /register: validated signup with concurrent address resolution
//! - PUT /members: full overwrite keyed by email
//! - GET /members: flattened listing without contact details

mod common;

use crate::common::{request_json, test_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn signup_payload(email: &str) -> Value {
    json!({
        "firstName": "Iris",
        "lastName": "Nguyen",
        "email": email,
        "gender": "female",
        "dateOfBirth": "1990-04-12",
        "primaryPhoneNumber": "0400 000 000",
        "secondaryPhoneNumber": "03 9000 0000",
        "membershipType": "full",
        "residentialAddress": {
            "street": "12 High St",
            "city": "Carlton",
            "state": "VIC",
            "postcode": "3053",
            "country": "Australia"
        },
        "postalAddress": {
            "street": "PO Box 88",
            "city": "Carlton",
            "state": "VIC",
            "postcode": "3053",
            "country": "Australia"
        }
    })
}

#[tokio::test]
async fn register_creates_unverified_member() {
    let ctx = test_app();

    let (status, body) =
        request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Iris");
    assert_eq!(body["email"], "iris@example.org");
    assert_eq!(body["membershipType"], "full");
    assert_eq!(body["verified"], false);

    // The hash is for the verification email only, never the response
    assert!(body.get("verificationHash").is_none());

    let stored = &ctx.deps.members.all()[0];
    assert_eq!(stored.verification_hash.len(), 64);
    assert!(stored.verification_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn register_resolves_both_addresses() {
    let ctx = test_app();

    let (status, body) =
        request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["residentialAddressId"].is_string());
    assert!(body["postalAddressId"].is_string());
    assert_ne!(body["residentialAddressId"], body["postalAddressId"]);
    assert_eq!(ctx.deps.addresses.count(), 2);
}

#[tokio::test]
async fn register_reuses_matching_addresses() {
    let ctx = test_app();

    request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;
    let (status, _) =
        request_json(&ctx.app, "POST", "/register", Some(signup_payload("sam@example.org"))).await;

    assert_eq!(status, StatusCode::OK);

    // Second signup shares both address rows with the first
    assert_eq!(ctx.deps.addresses.count(), 2);
    let members = ctx.deps.members.all();
    assert_eq!(
        members[0].residential_address_id,
        members[1].residential_address_id
    );
}

#[tokio::test]
async fn register_accepts_missing_addresses() {
    let ctx = test_app();

    let (status, body) = request_json(
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
    assert!(body["residentialAddressId"].is_null());
    assert!(body["postalAddressId"].is_null());
    assert_eq!(ctx.deps.addresses.count(), 0);
}

#[tokio::test]
async fn register_rejects_missing_email() {
    let ctx = test_app();

    let mut payload = signup_payload("iris@example.org");
    payload.as_object_mut().unwrap().remove("email");

    let (status, body) = request_json(&ctx.app, "POST", "/register", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));
    assert_eq!(ctx.deps.members.count(), 0);
}

#[tokio::test]
async fn register_rejects_blank_membership_type() {
    let ctx = test_app();

    let mut payload = signup_payload("iris@example.org");
    payload["membershipType"] = json!("   ");

    let (status, body) = request_json(&ctx.app, "POST", "/register", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("membershipType"));
}

#[tokio::test]
async fn update_overwrites_while_preserving_identity() {
    let ctx = test_app();

    request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;
    let original = ctx.deps.members.all()[0].clone();

    let (status, body) = request_json(
        &ctx.app,
        "PUT",
        "/members",
        Some(json!({
            "firstName": "Iris",
            "lastName": "Chen",
            "email": "iris@example.org",
            "primaryPhoneNumber": "0411 111 111",
            "membershipType": "supporter"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastName"], "Chen");
    assert_eq!(body["membershipType"], "supporter");
    assert_eq!(body["id"], original.id.to_string());

    let updated = ctx.deps.members.all()[0].clone();
    assert_eq!(updated.last_name, "Chen");
    assert_eq!(updated.primary_phone_number, "0411 111 111");
    // Verification state and hash survive untouched
    assert_eq!(updated.verified, original.verified);
    assert_eq!(updated.verification_hash, original.verification_hash);
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn update_detaches_omitted_addresses() {
    let ctx = test_app();

    request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;
    assert!(ctx.deps.members.all()[0].residential_address_id.is_some());

    let (status, body) = request_json(
        &ctx.app,
        "PUT",
        "/members",
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
    assert!(body["residentialAddressId"].is_null());
    assert!(ctx.deps.members.all()[0].residential_address_id.is_none());
}

#[tokio::test]
async fn update_unknown_email_is_a_generic_failure() {
    let ctx = test_app();

    let (status, body) = request_json(
        &ctx.app,
        "PUT",
        "/members",
        Some(json!({
            "firstName": "Iris",
            "lastName": "Nguyen",
            "email": "nobody@example.org",
            "primaryPhoneNumber": "0400 000 000",
            "membershipType": "full"
        })),
    )
    .await;

    // The response does not reveal whether the email exists
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "member could not be updated");
}

#[tokio::test]
async fn update_rejects_missing_phone() {
    let ctx = test_app();

    let (status, body) = request_json(
        &ctx.app,
        "PUT",
        "/members",
        Some(json!({
            "firstName": "Iris",
            "lastName": "Nguyen",
            "email": "iris@example.org",
            "membershipType": "full"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("primaryPhoneNumber"));
}

#[tokio::test]
async fn listing_flattens_residential_location() {
    let ctx = test_app();

    request_json(&ctx.app, "POST", "/register", Some(signup_payload("iris@example.org"))).await;
    request_json(
        &ctx.app,
        "POST",
        "/register",
        Some(json!({
            "firstName": "Sam",
            "lastName": "Wells",
            "email": "sam@example.org",
            "primaryPhoneNumber": "0422 222 222",
            "membershipType": "supporter"
        })),
    )
    .await;

    let (status, body) = request_json(&ctx.app, "GET", "/members", None).await;

    assert_eq!(status, StatusCode::OK);
    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);

    // Signup order, with the residential location flattened in
    assert_eq!(members[0]["firstName"], "Iris");
    assert_eq!(members[0]["postcode"], "3053");
    assert_eq!(members[0]["state"], "VIC");
    assert_eq!(members[0]["country"], "Australia");

    // No address on file means null location, not a missing row
    assert_eq!(members[1]["firstName"], "Sam");
    assert!(members[1]["postcode"].is_null());

    // Contact details stay out of the listing
    assert!(members[0].get("email").is_none());
    assert!(members[0].get("primaryPhoneNumber").is_none());
}
