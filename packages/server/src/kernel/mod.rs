//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod nats;
pub mod stream;
pub mod test_dependencies;
pub mod traits;

pub use deps::{LoggingChargeNotifier, PaypalAdapter, ServerDeps};
pub use nats::{NatsClientPublisher, NatsPublisher, PublishedMessage, TestNats};
pub use stream::EventStream;
pub use test_dependencies::TestDependencies;
pub use traits::*;
