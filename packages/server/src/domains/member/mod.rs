//! Member domain - signup, updates, listing, and verification
//!
//! Members join through the public signup form, may be edited later keyed
//! by email, and confirm their address by following a hashed link.

pub mod activities;
pub mod data;
pub mod error;
pub mod models;
pub mod verification;

// Re-export commonly used types
pub use data::{MemberData, MemberInput, MembersData, VerificationData};
pub use error::MemberError;
pub use models::member::Member;
