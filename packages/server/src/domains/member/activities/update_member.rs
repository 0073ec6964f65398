//! Update member activity - full-record overwrite keyed by email

use tracing::info;

use super::{resolve_address, validated_core};
use crate::domains::member::data::{MemberData, MemberInput};
use crate::domains::member::error::MemberError;
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// Update an existing member, matched by email.
///
/// Email is the key and never changes. Addresses are re-resolved from the
/// payload; omitting an address block detaches it. Verification state and
/// hash survive the update untouched.
pub async fn update_member(
    input: MemberInput,
    deps: &ServerDeps,
) -> Result<MemberData, MemberError> {
    let core = validated_core(&input)?;
    let MemberInput {
        gender,
        date_of_birth,
        secondary_phone_number,
        residential_address,
        postal_address,
        ..
    } = input;

    let existing = deps
        .members
        .find_by_email(&core.email)
        .await?
        .ok_or_else(|| MemberError::NotFound(format!("no member found for email {}", core.email)))?;

    let (residential, postal) = tokio::try_join!(
        resolve_address(residential_address, deps),
        resolve_address(postal_address, deps),
    )?;

    let updated = Member {
        id: existing.id,
        first_name: core.first_name,
        last_name: core.last_name,
        email: existing.email,
        gender,
        date_of_birth,
        primary_phone_number: core.primary_phone_number,
        secondary_phone_number,
        membership_type: core.membership_type,
        verified: existing.verified,
        verification_hash: existing.verification_hash,
        residential_address_id: residential.map(|a| a.id),
        postal_address_id: postal.map(|a| a.id),
        created_at: existing.created_at,
    };

    let saved = deps.members.update(&updated).await?;

    info!(member_id = %saved.id, "member updated");

    Ok(MemberData::from(saved))
}
