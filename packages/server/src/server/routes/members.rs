//! Member lifecycle routes.
//!
//! Each handler maps `MemberError` onto the wire with its own generic
//! phrase: invalid input keeps its message as a 400, while misses and
//! store failures share one 500 so the response never reveals whether an
//! email or hash exists.

use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::{error, warn};

use crate::common::ApiError;
use crate::domains::member::activities::{
    list_members, register_member, update_member, verify_member,
};
use crate::domains::member::{MemberData, MemberError, MemberInput, MembersData, VerificationData};
use crate::server::app::AppState;

fn member_error_response(err: MemberError, message: &str) -> ApiError {
    match err {
        MemberError::InvalidInput(detail) => ApiError::Validation(detail),
        MemberError::NotFound(detail) => {
            warn!(detail = %detail, "{}", message);
            ApiError::Internal(message.to_string())
        }
        MemberError::Downstream(source) => {
            error!(error = %source, "{}", message);
            ApiError::Internal(message.to_string())
        }
    }
}

pub async fn register_member_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<MemberInput>,
) -> Result<Json<MemberData>, ApiError> {
    register_member(input, &state.deps)
        .await
        .map(Json)
        .map_err(|e| member_error_response(e, "member could not be registered"))
}

pub async fn update_member_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<MemberInput>,
) -> Result<Json<MemberData>, ApiError> {
    update_member(input, &state.deps)
        .await
        .map(Json)
        .map_err(|e| member_error_response(e, "member could not be updated"))
}

pub async fn list_members_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<MembersData>, ApiError> {
    list_members(&state.deps)
        .await
        .map(Json)
        .map_err(|e| member_error_response(e, "fetching members failed"))
}

pub async fn verify_member_handler(
    Extension(state): Extension<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<VerificationData>, ApiError> {
    verify_member(&hash, &state.deps)
        .await
        .map(Json)
        .map_err(|e| member_error_response(e, "member could not be verified"))
}
