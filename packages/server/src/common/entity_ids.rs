//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{GroupId, MemberId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let member_id: MemberId = MemberId::new();
//! let group_id: GroupId = GroupId::new();
//!
//! // This would be a compile error:
//! // let wrong: GroupId = member_id;
//! ```

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Member entities (people signed up through the platform).
pub struct Member;

/// Marker type for Group entities (branch-scoped groups).
pub struct Group;

/// Marker type for Address entities (shared street addresses).
pub struct Address;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Member entities.
pub type MemberId = Id<Member>;

/// Typed ID for Group entities.
pub type GroupId = Id<Group>;

/// Typed ID for Address entities.
pub type AddressId = Id<Address>;

// ============================================================================
// Branch identifiers
// ============================================================================

/// Identifier of a branch.
///
/// Branches are administered by an upstream system and arrive as opaque
/// strings; they are never synthesized or parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct BranchId(String);

impl BranchId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BranchId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for BranchId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_id_serializes_as_plain_string() {
        let branch = BranchId::new("b1");
        let json = serde_json::to_string(&branch).unwrap();
        assert_eq!(json, "\"b1\"");
    }

    #[test]
    fn branch_id_round_trips_through_serde() {
        let branch: BranchId = serde_json::from_str("\"melbourne-cbd\"").unwrap();
        assert_eq!(branch.as_str(), "melbourne-cbd");
    }
}
