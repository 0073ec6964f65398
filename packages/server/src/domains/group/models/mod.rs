pub mod group;

pub use group::{Group, PgGroupStore};
