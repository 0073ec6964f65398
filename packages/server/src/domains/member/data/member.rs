use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AddressId, MemberId};
use crate::domains::member::models::member::Member as MemberModel;
use crate::domains::member::models::{AddressFields, MemberSummary, VerificationRecord};

/// Member API data type
///
/// Public representation of a member returned by signup and update. The
/// verification hash never appears here; it only travels in the
/// verification email.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    /// Unique identifier
    pub id: MemberId,

    pub first_name: String,

    pub last_name: String,

    /// Email address; the natural key for updates
    pub email: String,

    pub gender: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub primary_phone_number: String,

    pub secondary_phone_number: Option<String>,

    /// Membership tier chosen at signup (e.g. "full", "supporter")
    pub membership_type: String,

    /// Whether the member has clicked their verification link
    pub verified: bool,

    pub residential_address_id: Option<AddressId>,

    pub postal_address_id: Option<AddressId>,

    /// When the member signed up
    pub created_at: DateTime<Utc>,
}

impl From<MemberModel> for MemberData {
    fn from(member: MemberModel) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            gender: member.gender,
            date_of_birth: member.date_of_birth,
            primary_phone_number: member.primary_phone_number,
            secondary_phone_number: member.secondary_phone_number,
            membership_type: member.membership_type,
            verified: member.verified,
            residential_address_id: member.residential_address_id,
            postal_address_id: member.postal_address_id,
            created_at: member.created_at,
        }
    }
}

/// Request body for member signup and update.
///
/// Required-ness is enforced by the activities, not by serde, so that a
/// missing field produces a 400 with a field name rather than a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub primary_phone_number: Option<String>,
    pub secondary_phone_number: Option<String>,
    pub membership_type: Option<String>,
    pub residential_address: Option<AddressFields>,
    pub postal_address: Option<AddressFields>,
}

/// One row of the member listing: scalar member fields flattened with the
/// residential address's coarse location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummaryData {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub membership_type: String,
    pub verified: bool,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl From<MemberSummary> for MemberSummaryData {
    fn from(summary: MemberSummary) -> Self {
        Self {
            id: summary.id,
            first_name: summary.first_name,
            last_name: summary.last_name,
            membership_type: summary.membership_type,
            verified: summary.verified,
            postcode: summary.postcode,
            state: summary.state,
            country: summary.country,
        }
    }
}

/// Listing envelope for all members.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersData {
    pub members: Vec<MemberSummaryData>,
}

/// Verification outcome returned to the clicked link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationData {
    pub id: MemberId,
    pub email: String,
    pub verified: bool,
}

impl From<VerificationRecord> for VerificationData {
    fn from(record: VerificationRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            verified: record.verified,
        }
    }
}
