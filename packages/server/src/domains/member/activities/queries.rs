//! Member read-side queries

use tracing::debug;

use crate::domains::member::data::MembersData;
use crate::domains::member::error::MemberError;
use crate::kernel::ServerDeps;

/// Every member, flattened with their residential address location, in
/// signup order. Emails, phone numbers, and hashes stay out of this view.
pub async fn list_members(deps: &ServerDeps) -> Result<MembersData, MemberError> {
    let summaries = deps.members.list_summaries().await?;

    debug!(count = summaries.len(), "listed members");

    Ok(MembersData {
        members: summaries.into_iter().map(Into::into).collect(),
    })
}
