//! Group lifecycle activities.
//!
//! Each activity validates first, writes to the store second, and publishes
//! the fact event last. A failed publish fails the whole activity: callers
//! must never see success for an event that did not go out.

mod create_group;
mod queries;
mod remove_group;
mod update_group;

pub use create_group::create_group;
pub use queries::branch_groups;
pub use remove_group::remove_group;
pub use update_group::update_group;

use crate::common::validation::non_empty_string;
use crate::domains::group::data::GroupInput;
use crate::domains::group::error::GroupError;

/// Validation gate shared by create and update. Runs before any store or
/// publish call; both fields must be present and non-empty.
pub(crate) fn validated_fields(input: GroupInput) -> Result<(String, String), GroupError> {
    let name = require(input.name, "name")?;
    let description = require(input.description, "description")?;
    Ok((name, description))
}

fn require(value: Option<String>, field: &'static str) -> Result<String, GroupError> {
    match value {
        Some(v) if non_empty_string(Some(v.as_str())) => Ok(v),
        _ => Err(GroupError::InvalidInput(format!("{field} is required"))),
    }
}
