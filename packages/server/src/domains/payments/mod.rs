//! Payments domain - PayPal IPN intake
//!
//! The webhook acknowledges first and processes later; nothing in here can
//! change what PayPal was already told.

pub mod ipn;

pub use ipn::{process_notification, IpnFields};
