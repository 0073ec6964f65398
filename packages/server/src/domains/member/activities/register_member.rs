//! Register member activity - signup with address resolution

use chrono::Utc;
use tracing::info;

use super::{resolve_address, validated_core};
use crate::common::MemberId;
use crate::domains::member::data::{MemberData, MemberInput};
use crate::domains::member::error::MemberError;
use crate::domains::member::models::Member;
use crate::domains::member::verification::generate_verification_hash;
use crate::kernel::ServerDeps;

/// Sign up a new member.
///
/// The two address blocks are optional and resolved concurrently; matching
/// rows are reused rather than duplicated. New members start unverified
/// with a fresh verification hash.
pub async fn register_member(
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

    // Both lookups run at once; either failure aborts the signup
    let (residential, postal) = tokio::try_join!(
        resolve_address(residential_address, deps),
        resolve_address(postal_address, deps),
    )?;

    let member = Member {
        id: MemberId::new(),
        first_name: core.first_name,
        last_name: core.last_name,
        email: core.email,
        gender,
        date_of_birth,
        primary_phone_number: core.primary_phone_number,
        secondary_phone_number,
        membership_type: core.membership_type,
        verified: false,
        verification_hash: generate_verification_hash(),
        residential_address_id: residential.map(|a| a.id),
        postal_address_id: postal.map(|a| a.id),
        created_at: Utc::now(),
    };

    let saved = deps.members.insert(&member).await?;

    info!(member_id = %saved.id, email = %saved.email, "member signed up");

    Ok(MemberData::from(saved))
}
