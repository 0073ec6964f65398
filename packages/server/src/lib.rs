// Quorum Membership Platform - API Core
//
// This crate provides the backend API for branch-scoped group administration,
// member signup and verification, and payment gateway notifications.
// Domain logic lives in domains/*, infrastructure ports in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
