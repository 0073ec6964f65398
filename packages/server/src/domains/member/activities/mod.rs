//! Member lifecycle activities.
//!
//! Signup and update share the same input shape and the same required-field
//! gate; both resolve their two optional addresses concurrently before
//! touching the members table.

mod queries;
mod register_member;
mod update_member;
mod verify_member;

pub use queries::list_members;
pub use register_member::register_member;
pub use update_member::update_member;
pub use verify_member::verify_member;

use crate::common::validation::non_empty_string;
use crate::domains::member::data::MemberInput;
use crate::domains::member::error::MemberError;
use crate::domains::member::models::{Address, AddressFields};
use crate::kernel::ServerDeps;

/// The always-required member fields, validated and owned.
#[derive(Debug)]
pub(crate) struct CoreFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub primary_phone_number: String,
    pub membership_type: String,
}

/// Validation gate shared by signup and update.
pub(crate) fn validated_core(input: &MemberInput) -> Result<CoreFields, MemberError> {
    Ok(CoreFields {
        first_name: require(input.first_name.as_deref(), "firstName")?,
        last_name: require(input.last_name.as_deref(), "lastName")?,
        email: require(input.email.as_deref(), "email")?,
        primary_phone_number: require(input.primary_phone_number.as_deref(), "primaryPhoneNumber")?,
        membership_type: require(input.membership_type.as_deref(), "membershipType")?,
    })
}

fn require(value: Option<&str>, field: &'static str) -> Result<String, MemberError> {
    match value {
        Some(v) if non_empty_string(Some(v)) => Ok(v.to_string()),
        _ => Err(MemberError::InvalidInput(format!("{field} is required"))),
    }
}

/// Resolve an optional address block to a shared address row.
pub(crate) async fn resolve_address(
    fields: Option<AddressFields>,
    deps: &ServerDeps,
) -> Result<Option<Address>, MemberError> {
    match fields {
        Some(fields) => Ok(Some(deps.addresses.find_or_create(&fields).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> MemberInput {
        serde_json::from_str(
            r#"{
                "firstName": "Iris",
                "lastName": "Nguyen",
                "email": "iris@example.org",
                "primaryPhoneNumber": "0400 000 000",
                "membershipType": "full"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn validated_core_accepts_complete_input() {
        let core = validated_core(&full_input()).unwrap();
        assert_eq!(core.first_name, "Iris");
        assert_eq!(core.email, "iris@example.org");
    }

    #[test]
    fn validated_core_rejects_missing_email() {
        let mut input = full_input();
        input.email = None;
        let err = validated_core(&input).unwrap_err();
        assert!(matches!(err, MemberError::InvalidInput(m) if m.contains("email")));
    }

    #[test]
    fn validated_core_rejects_blank_phone() {
        let mut input = full_input();
        input.primary_phone_number = Some("  ".to_string());
        let err = validated_core(&input).unwrap_err();
        assert!(matches!(err, MemberError::InvalidInput(m) if m.contains("primaryPhoneNumber")));
    }
}
