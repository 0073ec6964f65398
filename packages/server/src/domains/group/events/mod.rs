use anyhow::Result;
use serde_json::{json, Value};

use crate::common::GroupId;
use crate::domains::group::data::GroupData;
use crate::kernel::EventStream;

/// Group domain events - FACT EVENTS ONLY
///
/// These are immutable facts about what happened, published after the store
/// write succeeds. Created and Edited carry the full record; Removed carries
/// only the id.
#[derive(Debug, Clone)]
pub enum GroupEvent {
    /// Group was created
    Created(GroupData),

    /// Group's name or description changed
    Edited(GroupData),

    /// Group was deleted
    Removed { id: GroupId },
}

impl GroupEvent {
    /// Wire-level event type consumers dispatch on.
    pub fn event_type(&self) -> &'static str {
        match self {
            GroupEvent::Created(_) => "group-created",
            GroupEvent::Edited(_) => "group-edited",
            GroupEvent::Removed { .. } => "group-removed",
        }
    }

    /// Event payload (the `data` half of the envelope).
    pub fn payload(&self) -> serde_json::Result<Value> {
        match self {
            GroupEvent::Created(data) | GroupEvent::Edited(data) => serde_json::to_value(data),
            GroupEvent::Removed { id } => Ok(json!({ "id": id })),
        }
    }

    /// Publish this event on the stream.
    pub async fn publish(&self, stream: &EventStream) -> Result<()> {
        stream.publish(self.event_type(), self.payload()?).await
    }
}
