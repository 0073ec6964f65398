//! Group lifecycle routes.
//!
//! Thin wrappers over the group activities: path segments become typed ids
//! here, and domain errors become wire responses through `ApiError`.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use crate::common::validation::valid_uuid;
use crate::common::{ApiError, BranchId, GroupId};
use crate::domains::group::activities::{branch_groups, create_group, remove_group, update_group};
use crate::domains::group::{GroupData, GroupInput, GroupsData};
use crate::server::app::AppState;

/// Group ids travel as path segments; anything that is not a UUID is a
/// caller mistake, rejected before any store lookup.
fn parse_group_id(raw: &str) -> Result<GroupId, ApiError> {
    if !valid_uuid(raw) {
        return Err(ApiError::Validation(format!(
            "group id '{}' is not a valid UUID",
            raw
        )));
    }
    GroupId::parse(raw)
        .map_err(|_| ApiError::Validation(format!("group id '{}' is not a valid UUID", raw)))
}

pub async fn create_group_handler(
    Extension(state): Extension<AppState>,
    Path(branch_id): Path<String>,
    Json(input): Json<GroupInput>,
) -> Result<Json<GroupData>, ApiError> {
    let group = create_group(BranchId::new(branch_id), input, &state.deps).await?;
    Ok(Json(group))
}

pub async fn list_groups_handler(
    Extension(state): Extension<AppState>,
    Path(branch_id): Path<String>,
) -> Result<Json<GroupsData>, ApiError> {
    let groups = branch_groups(BranchId::new(branch_id), &state.deps).await?;
    Ok(Json(groups))
}

pub async fn update_group_handler(
    Extension(state): Extension<AppState>,
    Path((branch_id, group_id)): Path<(String, String)>,
    Json(input): Json<GroupInput>,
) -> Result<Json<GroupData>, ApiError> {
    let group_id = parse_group_id(&group_id)?;
    let group = update_group(BranchId::new(branch_id), group_id, input, &state.deps).await?;
    Ok(Json(group))
}

pub async fn remove_group_handler(
    Extension(state): Extension<AppState>,
    Path((branch_id, group_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let group_id = parse_group_id(&group_id)?;
    remove_group(BranchId::new(branch_id), group_id, &state.deps).await?;
    Ok(StatusCode::OK)
}
