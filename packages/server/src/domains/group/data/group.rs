use serde::{Deserialize, Serialize};

use crate::common::{BranchId, GroupId};
use crate::domains::group::models::Group;

/// Group API data type
///
/// Public representation of a group. This is also the payload shape of
/// `group-created` and `group-edited` events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    /// Unique identifier, synthesized at creation time
    pub id: GroupId,

    /// Branch the group belongs to
    pub branch_id: BranchId,

    pub name: String,

    pub description: String,
}

impl From<Group> for GroupData {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            branch_id: group.branch_id,
            name: group.name,
            description: group.description,
        }
    }
}

/// Request body for creating or updating a group.
///
/// Fields are optional at the serde level so that absent and null values
/// reach the validator as `None` instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Listing envelope for a branch's groups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsData {
    pub groups: Vec<GroupData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_data_uses_camel_case_keys() {
        let group = Group::new(BranchId::new("b1"), "Book Club", "Weekly meetup");
        let data = GroupData::from(group);
        let json = serde_json::to_value(&data).unwrap();

        assert!(json.get("branchId").is_some());
        assert!(json.get("branch_id").is_none());
        assert_eq!(json["name"], "Book Club");
    }

    #[test]
    fn group_input_tolerates_missing_fields() {
        let input: GroupInput = serde_json::from_str(r#"{"name": "Book Club"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Book Club"));
        assert!(input.description.is_none());

        let input: GroupInput =
            serde_json::from_str(r#"{"name": null, "description": null}"#).unwrap();
        assert!(input.name.is_none());
        assert!(input.description.is_none());
    }
}
