// TestDependencies - mock implementations for testing
//
// Provides in-memory stores and recording mocks that can be wired into
// ServerDeps for tests. No database, broker, or gateway is required.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{
    BaseAddressStore, BaseChargeNotifier, BaseGroupStore, BaseMemberStore, BasePaymentGateway,
    EventStream, ServerDeps, TestNats,
};
use crate::common::{BranchId, GroupId, MemberId};
use crate::domains::group::models::Group;
use crate::domains::member::models::{
    Address, AddressFields, Member, MemberSummary, VerificationRecord,
};

/// Subject the test event stream publishes to.
pub const TEST_EVENT_SUBJECT: &str = "membership.events";

// =============================================================================
// In-memory Group Store
// =============================================================================

#[derive(Default)]
pub struct MemoryGroupStore {
    groups: Mutex<Vec<Group>>,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored groups, in insertion order.
    pub fn all(&self) -> Vec<Group> {
        self.groups.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.groups.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseGroupStore for MemoryGroupStore {
    async fn insert(&self, group: &Group) -> Result<Group> {
        self.groups.lock().unwrap().push(group.clone());
        Ok(group.clone())
    }

    async fn find_in_branch(
        &self,
        branch_id: &BranchId,
        group_id: GroupId,
    ) -> Result<Option<Group>> {
        Ok(self
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.branch_id == *branch_id && g.id == group_id)
            .cloned())
    }

    async fn update(&self, group: &Group) -> Result<Group> {
        let mut groups = self.groups.lock().unwrap();
        match groups.iter_mut().find(|g| g.id == group.id) {
            Some(stored) => {
                *stored = group.clone();
                Ok(group.clone())
            }
            None => anyhow::bail!("no group with id {}", group.id),
        }
    }

    async fn delete(&self, group_id: GroupId) -> Result<()> {
        self.groups.lock().unwrap().retain(|g| g.id != group_id);
        Ok(())
    }

    async fn find_by_branch(&self, branch_id: &BranchId) -> Result<Vec<Group>> {
        Ok(self
            .groups
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.branch_id == *branch_id)
            .cloned()
            .collect())
    }
}

// =============================================================================
// In-memory Address Store
// =============================================================================

#[derive(Default)]
pub struct MemoryAddressStore {
    addresses: Mutex<Vec<Address>>,
}

impl MemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.addresses.lock().unwrap().len()
    }

    pub fn get(&self, id: crate::common::AddressId) -> Option<Address> {
        self.addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }
}

#[async_trait]
impl BaseAddressStore for MemoryAddressStore {
    async fn find_or_create(&self, fields: &AddressFields) -> Result<Address> {
        let mut addresses = self.addresses.lock().unwrap();
        if let Some(existing) = addresses.iter().find(|a| a.matches(fields)) {
            return Ok(existing.clone());
        }
        let created = Address::from_fields(fields);
        addresses.push(created.clone());
        Ok(created)
    }
}

// =============================================================================
// In-memory Member Store
// =============================================================================

/// Member store fake. Holds the address store so summaries can flatten
/// residential addresses the way the SQL join does.
pub struct MemoryMemberStore {
    addresses: Arc<MemoryAddressStore>,
    members: Mutex<Vec<Member>>,
    mark_verified_calls: AtomicUsize,
}

impl MemoryMemberStore {
    pub fn new(addresses: Arc<MemoryAddressStore>) -> Self {
        Self {
            addresses,
            members: Mutex::new(Vec::new()),
            mark_verified_calls: AtomicUsize::new(0),
        }
    }

    /// All stored members, in insertion order.
    pub fn all(&self) -> Vec<Member> {
        self.members.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    /// How many times `mark_verified` has been called.
    pub fn mark_verified_calls(&self) -> usize {
        self.mark_verified_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseMemberStore for MemoryMemberStore {
    async fn insert(&self, member: &Member) -> Result<Member> {
        let mut members = self.members.lock().unwrap();
        // Mirrors the unique index on members.email
        if members.iter().any(|m| m.email == member.email) {
            anyhow::bail!("duplicate email {}", member.email);
        }
        members.push(member.clone());
        Ok(member.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn update(&self, member: &Member) -> Result<Member> {
        let mut members = self.members.lock().unwrap();
        match members.iter_mut().find(|m| m.id == member.id) {
            Some(stored) => {
                *stored = member.clone();
                Ok(member.clone())
            }
            None => anyhow::bail!("no member with id {}", member.id),
        }
    }

    async fn find_by_verification_hash(&self, hash: &str) -> Result<Option<VerificationRecord>> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.verification_hash == hash)
            .map(|m| VerificationRecord {
                id: m.id,
                email: m.email.clone(),
                verified: m.verified,
            }))
    }

    async fn mark_verified(&self, member_id: MemberId) -> Result<()> {
        self.mark_verified_calls.fetch_add(1, Ordering::SeqCst);
        let mut members = self.members.lock().unwrap();
        match members.iter_mut().find(|m| m.id == member_id) {
            Some(stored) => {
                stored.verified = true;
                Ok(())
            }
            None => anyhow::bail!("no member with id {}", member_id),
        }
    }

    async fn list_summaries(&self) -> Result<Vec<MemberSummary>> {
        let members = self.members.lock().unwrap();
        Ok(members
            .iter()
            .map(|m| {
                let address = m.residential_address_id.and_then(|id| self.addresses.get(id));
                MemberSummary {
                    id: m.id,
                    first_name: m.first_name.clone(),
                    last_name: m.last_name.clone(),
                    membership_type: m.membership_type.clone(),
                    verified: m.verified,
                    postcode: address.as_ref().map(|a| a.postcode.clone()),
                    state: address.as_ref().map(|a| a.state.clone()),
                    country: address.as_ref().map(|a| a.country.clone()),
                }
            })
            .collect())
    }
}

// =============================================================================
// Mock Payment Gateway
// =============================================================================

/// Payment gateway mock. Answers `verify_ipn` with a configurable verdict
/// and records every body it was asked about.
#[derive(Default)]
pub struct MockPaymentGateway {
    verified: AtomicBool,
    fail: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the gateway confirm (or reject) subsequent notifications.
    pub fn set_verified(&self, verified: bool) {
        self.verified.store(verified, Ordering::SeqCst);
    }

    /// Make `verify_ipn` fail outright, as if PayPal were unreachable.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Raw bodies received for verification, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePaymentGateway for MockPaymentGateway {
    async fn verify_ipn(&self, raw_body: &str) -> Result<bool> {
        self.calls.lock().unwrap().push(raw_body.to_string());
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("gateway unreachable");
        }
        Ok(self.verified.load(Ordering::SeqCst))
    }
}

// =============================================================================
// Mock Charge Notifier
// =============================================================================

/// Records charge callbacks so tests can assert exactly which payments
/// were handed downstream.
#[derive(Default)]
pub struct MockChargeNotifier {
    charges: Mutex<Vec<(String, String)>>,
}

impl MockChargeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All (reference, transaction_id) pairs reported so far.
    pub fn charges(&self) -> Vec<(String, String)> {
        self.charges.lock().unwrap().clone()
    }

    pub fn charge_count(&self) -> usize {
        self.charges.lock().unwrap().len()
    }

    pub fn was_charged(&self, reference: &str, transaction_id: &str) -> bool {
        self.charges
            .lock()
            .unwrap()
            .iter()
            .any(|(r, t)| r == reference && t == transaction_id)
    }
}

#[async_trait]
impl BaseChargeNotifier for MockChargeNotifier {
    async fn charge_succeeded(&self, reference: &str, transaction_id: &str) -> Result<()> {
        self.charges
            .lock()
            .unwrap()
            .push((reference.to_string(), transaction_id.to_string()));
        Ok(())
    }
}

// =============================================================================
// TestDependencies bundle
// =============================================================================

/// Everything a test needs to stand up the application in-process: the
/// in-memory stores, the recording NATS client, and the payment mocks.
/// Handles stay with the test so it can seed state and assert on effects.
pub struct TestDependencies {
    pub groups: Arc<MemoryGroupStore>,
    pub addresses: Arc<MemoryAddressStore>,
    pub members: Arc<MemoryMemberStore>,
    pub nats: Arc<TestNats>,
    pub gateway: Arc<MockPaymentGateway>,
    pub charges: Arc<MockChargeNotifier>,
}

impl TestDependencies {
    pub fn new() -> Self {
        let addresses = Arc::new(MemoryAddressStore::new());
        Self {
            groups: Arc::new(MemoryGroupStore::new()),
            members: Arc::new(MemoryMemberStore::new(addresses.clone())),
            addresses,
            nats: Arc::new(TestNats::new()),
            gateway: Arc::new(MockPaymentGateway::new()),
            charges: Arc::new(MockChargeNotifier::new()),
        }
    }

    /// Wire the mocks into a ServerDeps container.
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.groups.clone(),
            self.addresses.clone(),
            self.members.clone(),
            EventStream::new(self.nats.clone(), TEST_EVENT_SUBJECT),
            self.gateway.clone(),
            self.charges.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn address_store_reuses_exact_matches() {
        let store = MemoryAddressStore::new();
        let fields = AddressFields {
            street: "12 High St".to_string(),
            city: "Carlton".to_string(),
            state: "VIC".to_string(),
            postcode: "3053".to_string(),
            country: "Australia".to_string(),
        };

        let first = store.find_or_create(&fields).await.unwrap();
        let second = store.find_or_create(&fields).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn address_store_creates_on_any_field_difference() {
        let store = MemoryAddressStore::new();
        let fields = AddressFields {
            street: "12 High St".to_string(),
            city: "Carlton".to_string(),
            state: "VIC".to_string(),
            postcode: "3053".to_string(),
            country: "Australia".to_string(),
        };
        let mut other = fields.clone();
        other.postcode = "3054".to_string();

        store.find_or_create(&fields).await.unwrap();
        store.find_or_create(&other).await.unwrap();

        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn group_store_preserves_insertion_order_per_branch() {
        let store = MemoryGroupStore::new();
        let b1 = BranchId::new("b1");
        let b2 = BranchId::new("b2");

        let first = Group::new(b1.clone(), "First", "one");
        let other = Group::new(b2.clone(), "Other", "two");
        let second = Group::new(b1.clone(), "Second", "three");

        store.insert(&first).await.unwrap();
        store.insert(&other).await.unwrap();
        store.insert(&second).await.unwrap();

        let groups = store.find_by_branch(&b1).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, first.id);
        assert_eq!(groups[1].id, second.id);
    }
}
