//! Domain event stream bound to a single NATS subject.
//!
//! Lifecycle events share one subject; consumers dispatch on the `type`
//! field of the envelope. The envelope is `{"type": ..., "data": ...}`.

use std::sync::Arc;

use anyhow::Result;
use bytes::Bytes;
use serde_json::{json, Value};

use super::nats::NatsPublisher;

/// Handle for publishing domain events.
///
/// Cheap to clone; clones share the underlying publisher.
#[derive(Clone)]
pub struct EventStream {
    publisher: Arc<dyn NatsPublisher>,
    subject: String,
}

impl EventStream {
    pub fn new(publisher: Arc<dyn NatsPublisher>, subject: impl Into<String>) -> Self {
        Self {
            publisher,
            subject: subject.into(),
        }
    }

    /// Wrap a payload in the event envelope and publish it.
    ///
    /// Failures propagate to the caller: an event that cannot be published
    /// must fail the operation that produced it.
    pub async fn publish(&self, event_type: &str, payload: Value) -> Result<()> {
        let envelope = json!({
            "type": event_type,
            "data": payload,
        });
        let bytes = Bytes::from(serde_json::to_vec(&envelope)?);
        self.publisher.publish(self.subject.clone(), bytes).await
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}
