//! NATS client abstraction for production and testing.
//!
//! Provides a trait-based NATS implementation that allows swapping between
//! real NATS connections and test mocks.

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// A published message.
#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub subject: String,
    pub payload: Bytes,
}

/// Trait for NATS publish operations.
///
/// This allows swapping between real NATS and test mocks.
#[async_trait]
pub trait NatsPublisher: Send + Sync {
    /// Publish a message to a subject.
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()>;
}

/// Real NATS client publisher.
pub struct NatsClientPublisher {
    client: async_nats::Client,
}

impl NatsClientPublisher {
    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NatsPublisher for NatsClientPublisher {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        self.client.publish(subject, payload).await?;
        Ok(())
    }
}

/// Mock NATS client that tracks published messages for testing.
///
/// This allows tests to inspect what messages would have been published
/// to NATS without requiring a real connection. Publishing can be forced
/// to fail to exercise broker-outage paths.
#[derive(Default)]
pub struct TestNats {
    /// Messages published to subjects.
    published: RwLock<Vec<PublishedMessage>>,
    /// When set, `publish` returns an error and records nothing.
    fail_publishes: AtomicBool,
}

impl TestNats {
    /// Create a new test NATS client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `publish` calls fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.fail_publishes.store(failing, Ordering::SeqCst);
    }

    /// Record a published message.
    pub fn record_publish(&self, subject: String, payload: Bytes) {
        self.published
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(PublishedMessage { subject, payload });
    }

    /// Get all published messages.
    pub fn published_messages(&self) -> Vec<PublishedMessage> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Check if any message was published to a subject.
    pub fn was_published_to(&self, subject: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|m| m.subject == subject)
    }

    /// Get the count of published messages.
    pub fn publish_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Deserialize a published message payload as JSON.
    pub fn deserialize_message<T: serde::de::DeserializeOwned>(
        &self,
        msg: &PublishedMessage,
    ) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&msg.payload)
    }
}

#[async_trait]
impl NatsPublisher for TestNats {
    async fn publish(&self, subject: String, payload: Bytes) -> Result<()> {
        if self.fail_publishes.load(Ordering::SeqCst) {
            anyhow::bail!("publish to {subject} rejected by test configuration");
        }
        self.record_publish(subject, payload);
        Ok(())
    }
}
