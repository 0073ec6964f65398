//! Server dependencies for domain activities (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! activities. All external services use trait abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use paypal::{IpnVerification, PaypalService};
use std::sync::Arc;

use crate::kernel::stream::EventStream;
use crate::kernel::{
    BaseAddressStore, BaseChargeNotifier, BaseGroupStore, BaseMemberStore, BasePaymentGateway,
};

// =============================================================================
// PaypalService Adapter (implements BasePaymentGateway trait)
// =============================================================================

/// Wrapper around PaypalService that implements BasePaymentGateway trait
pub struct PaypalAdapter(pub Arc<PaypalService>);

impl PaypalAdapter {
    pub fn new(service: Arc<PaypalService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BasePaymentGateway for PaypalAdapter {
    async fn verify_ipn(&self, raw_body: &str) -> Result<bool> {
        self.0
            .verify_ipn(raw_body)
            .await
            .map(|outcome| outcome == IpnVerification::Verified)
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// Charge Notifier (log-backed default)
// =============================================================================

/// Charge notifier that records successful charges in the application log.
/// Bookkeeping systems consume the log stream downstream.
pub struct LoggingChargeNotifier;

#[async_trait]
impl BaseChargeNotifier for LoggingChargeNotifier {
    async fn charge_succeeded(&self, reference: &str, transaction_id: &str) -> Result<()> {
        tracing::info!(reference, transaction_id, "payment charge succeeded");
        Ok(())
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub groups: Arc<dyn BaseGroupStore>,
    pub addresses: Arc<dyn BaseAddressStore>,
    pub members: Arc<dyn BaseMemberStore>,
    /// Domain event stream; every lifecycle event goes out through here
    pub events: EventStream,
    pub payment_gateway: Arc<dyn BasePaymentGateway>,
    pub charge_notifier: Arc<dyn BaseChargeNotifier>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        groups: Arc<dyn BaseGroupStore>,
        addresses: Arc<dyn BaseAddressStore>,
        members: Arc<dyn BaseMemberStore>,
        events: EventStream,
        payment_gateway: Arc<dyn BasePaymentGateway>,
        charge_notifier: Arc<dyn BaseChargeNotifier>,
    ) -> Self {
        Self {
            groups,
            addresses,
            members,
            events,
            payment_gateway,
            charge_notifier,
        }
    }
}
