//! Update group activity - merge new fields over the stored record

use tracing::info;

use super::validated_fields;
use crate::common::{BranchId, GroupId};
use crate::domains::group::data::{GroupData, GroupInput};
use crate::domains::group::error::GroupError;
use crate::domains::group::events::GroupEvent;
use crate::domains::group::models::Group;
use crate::kernel::ServerDeps;

/// Replace a group's name and description.
///
/// The lookup is branch-scoped: a valid group id in the wrong branch is a
/// miss. The `group-edited` event carries the merged record.
pub async fn update_group(
    branch_id: BranchId,
    group_id: GroupId,
    input: GroupInput,
    deps: &ServerDeps,
) -> Result<GroupData, GroupError> {
    let (name, description) = validated_fields(input)?;

    let existing = deps
        .groups
        .find_in_branch(&branch_id, group_id)
        .await?
        .ok_or_else(|| GroupError::NotFound {
            branch_id,
            group_id,
        })?;

    let merged = Group {
        name,
        description,
        ..existing
    };
    let saved = deps.groups.update(&merged).await?;

    let data = GroupData::from(saved);
    GroupEvent::Edited(data.clone()).publish(&deps.events).await?;

    info!(group_id = %data.id, branch_id = %data.branch_id, "group updated");

    Ok(data)
}
