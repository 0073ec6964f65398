//! Create group activity - validate, persist, announce

use tracing::info;

use super::validated_fields;
use crate::common::BranchId;
use crate::domains::group::data::{GroupData, GroupInput};
use crate::domains::group::error::GroupError;
use crate::domains::group::events::GroupEvent;
use crate::domains::group::models::Group;
use crate::kernel::ServerDeps;

/// Create a group inside a branch.
///
/// The id is synthesized here, never taken from the caller. The
/// `group-created` event carries the record exactly as stored.
pub async fn create_group(
    branch_id: BranchId,
    input: GroupInput,
    deps: &ServerDeps,
) -> Result<GroupData, GroupError> {
    let (name, description) = validated_fields(input)?;

    let group = Group::new(branch_id, name, description);
    let saved = deps.groups.insert(&group).await?;

    let data = GroupData::from(saved);
    GroupEvent::Created(data.clone()).publish(&deps.events).await?;

    info!(group_id = %data.id, branch_id = %data.branch_id, "group created");

    Ok(data)
}
