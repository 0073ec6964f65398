// Main entry point for the membership API server

use std::sync::Arc;

use anyhow::{Context, Result};
use paypal::{PaypalOptions, PaypalService};
use server_core::domains::group::models::PgGroupStore;
use server_core::domains::member::models::{PgAddressStore, PgMemberStore};
use server_core::kernel::{
    EventStream, LoggingChargeNotifier, NatsClientPublisher, PaypalAdapter, ServerDeps,
};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Quorum membership API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Connect to NATS for the domain event stream
    tracing::info!("Connecting to NATS at {}...", config.nats_url);
    let nats_client = async_nats::connect(&config.nats_url)
        .await
        .context("Failed to connect to NATS")?;
    let events = EventStream::new(
        Arc::new(NatsClientPublisher::new(nats_client)),
        config.event_stream_subject.clone(),
    );
    tracing::info!("NATS connected");

    // PayPal IPN verification client
    let paypal = Arc::new(PaypalService::new(PaypalOptions {
        verify_url: config.paypal_verify_url.clone(),
    }));

    let deps = Arc::new(ServerDeps::new(
        Arc::new(PgGroupStore::new(pool.clone())),
        Arc::new(PgAddressStore::new(pool.clone())),
        Arc::new(PgMemberStore::new(pool.clone())),
        events,
        Arc::new(PaypalAdapter::new(paypal)),
        Arc::new(LoggingChargeNotifier),
    ));

    // Build application
    let app = build_app(pool, deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
