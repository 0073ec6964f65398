// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "register a member") should be domain functions that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGroupStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{BranchId, GroupId, MemberId};
use crate::domains::group::models::Group;
use crate::domains::member::models::{Address, AddressFields, Member, MemberSummary, VerificationRecord};

// =============================================================================
// Group Store Trait (Infrastructure - group persistence)
// =============================================================================

#[async_trait]
pub trait BaseGroupStore: Send + Sync {
    /// Persist a new group and return the stored record
    async fn insert(&self, group: &Group) -> Result<Group>;

    /// Find a group by id, scoped to a branch
    async fn find_in_branch(&self, branch_id: &BranchId, group_id: GroupId)
        -> Result<Option<Group>>;

    /// Overwrite the mutable fields of an existing group
    async fn update(&self, group: &Group) -> Result<Group>;

    /// Delete a group by id
    async fn delete(&self, group_id: GroupId) -> Result<()>;

    /// All groups belonging to a branch, in insertion order
    async fn find_by_branch(&self, branch_id: &BranchId) -> Result<Vec<Group>>;
}

// =============================================================================
// Address Store Trait (Infrastructure - shared addresses)
// =============================================================================

#[async_trait]
pub trait BaseAddressStore: Send + Sync {
    /// Return the address whose fields exactly match, creating it if absent
    async fn find_or_create(&self, fields: &AddressFields) -> Result<Address>;
}

// =============================================================================
// Member Store Trait (Infrastructure - member persistence)
// =============================================================================

#[async_trait]
pub trait BaseMemberStore: Send + Sync {
    /// Persist a new member and return the stored record
    async fn insert(&self, member: &Member) -> Result<Member>;

    /// Find a member by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>>;

    /// Overwrite the mutable fields of an existing member
    async fn update(&self, member: &Member) -> Result<Member>;

    /// Look up the verification projection for a hash
    async fn find_by_verification_hash(&self, hash: &str) -> Result<Option<VerificationRecord>>;

    /// Flip a member's verified flag to true
    async fn mark_verified(&self, member_id: MemberId) -> Result<()>;

    /// Flattened listing of all members, in signup order
    async fn list_summaries(&self) -> Result<Vec<MemberSummary>>;
}

// =============================================================================
// Payment Gateway Trait (Infrastructure - IPN verification)
// =============================================================================

#[async_trait]
pub trait BasePaymentGateway: Send + Sync {
    /// Ask the gateway whether a raw IPN body is authentic.
    ///
    /// `Ok(true)` means the gateway confirmed the notification; `Ok(false)`
    /// means it answered and rejected it. Transport failures are errors.
    async fn verify_ipn(&self, raw_body: &str) -> Result<bool>;
}

// =============================================================================
// Charge Notifier Trait (Infrastructure - downstream payment bookkeeping)
// =============================================================================

#[async_trait]
pub trait BaseChargeNotifier: Send + Sync {
    /// Report a completed, verified charge keyed by the correlation token
    /// supplied at payment time and the gateway's transaction id.
    async fn charge_succeeded(&self, reference: &str, transaction_id: &str) -> Result<()>;
}
