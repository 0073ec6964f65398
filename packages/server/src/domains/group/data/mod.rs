pub mod group;

pub use group::{GroupData, GroupInput, GroupsData};
