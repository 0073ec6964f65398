//! Group domain - branch-scoped group lifecycle
//!
//! Groups are created, edited, and removed by branch administrators; every
//! successful write is announced on the event stream.

pub mod activities;
pub mod data;
pub mod error;
pub mod events;
pub mod models;

// Re-export commonly used types
pub use data::{GroupData, GroupInput, GroupsData};
pub use error::GroupError;
pub use events::GroupEvent;
pub use models::Group;
