//! Group read-side queries

use tracing::debug;

use crate::common::BranchId;
use crate::domains::group::data::{GroupData, GroupsData};
use crate::domains::group::error::GroupError;
use crate::kernel::ServerDeps;

/// All groups in a branch, in the order they were created.
///
/// A branch with no groups is an empty listing, not an error.
pub async fn branch_groups(branch_id: BranchId, deps: &ServerDeps) -> Result<GroupsData, GroupError> {
    let groups = deps.groups.find_by_branch(&branch_id).await?;

    debug!(branch_id = %branch_id, count = groups.len(), "listed branch groups");

    Ok(GroupsData {
        groups: groups.into_iter().map(GroupData::from).collect(),
    })
}
