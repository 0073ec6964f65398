//! Verify member activity - idempotent flag flip by hash

use tracing::info;

use crate::domains::member::data::VerificationData;
use crate::domains::member::error::MemberError;
use crate::kernel::ServerDeps;

/// Verify the member owning this hash.
///
/// Idempotent: an already-verified member is answered without another
/// store write, so a re-clicked link behaves exactly like the first click.
pub async fn verify_member(hash: &str, deps: &ServerDeps) -> Result<VerificationData, MemberError> {
    let record = deps
        .members
        .find_by_verification_hash(hash)
        .await?
        .ok_or_else(|| MemberError::NotFound("verification hash matched no member".to_string()))?;

    if record.verified {
        info!(member_id = %record.id, "member already verified");
        return Ok(VerificationData::from(record));
    }

    deps.members.mark_verified(record.id).await?;

    info!(member_id = %record.id, "member verified");

    Ok(VerificationData {
        id: record.id,
        email: record.email,
        verified: true,
    })
}
