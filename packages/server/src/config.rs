use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub nats_url: String,
    /// Subject all lifecycle events are published on
    pub event_stream_subject: String,
    /// PayPal IPN verification endpoint (sandbox or live)
    pub paypal_verify_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            nats_url: env::var("NATS_URL")
                .unwrap_or_else(|_| "nats://localhost:4222".to_string()),
            event_stream_subject: env::var("EVENT_STREAM_SUBJECT")
                .unwrap_or_else(|_| "membership.events".to_string()),
            paypal_verify_url: env::var("PAYPAL_VERIFY_URL")
                .unwrap_or_else(|_| paypal::LIVE_VERIFY_URL.to_string()),
        })
    }
}
