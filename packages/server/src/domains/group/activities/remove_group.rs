//! Remove group activity - delete then announce

use tracing::info;

use crate::common::{BranchId, GroupId};
use crate::domains::group::error::GroupError;
use crate::domains::group::events::GroupEvent;
use crate::kernel::ServerDeps;

/// Delete a group from a branch.
///
/// The group must exist in the branch before the delete runs. The
/// `group-removed` event carries only the id; a failed publish fails the
/// removal even though the row is already gone.
pub async fn remove_group(
    branch_id: BranchId,
    group_id: GroupId,
    deps: &ServerDeps,
) -> Result<(), GroupError> {
    deps.groups
        .find_in_branch(&branch_id, group_id)
        .await?
        .ok_or_else(|| GroupError::NotFound {
            branch_id,
            group_id,
        })?;

    deps.groups.delete(group_id).await?;

    GroupEvent::Removed { id: group_id }
        .publish(&deps.events)
        .await?;

    info!(group_id = %group_id, "group removed");

    Ok(())
}
