//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_group_handler, health_handler, ipn_handler, list_groups_handler, list_members_handler,
    register_member_handler, remove_group_handler, update_group_handler, update_member_handler,
    verify_member_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Handlers receive `AppState` through an extension and call into domain
/// activities; nothing below the routes layer knows about HTTP.
pub fn build_app(pool: PgPool, deps: Arc<ServerDeps>) -> Router {
    let app_state = AppState { db_pool: pool, deps };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Group lifecycle, scoped to a branch
        .route(
            "/branches/:branch_id/groups",
            post(create_group_handler).get(list_groups_handler),
        )
        .route(
            "/branches/:branch_id/groups/:group_id",
            put(update_group_handler).delete(remove_group_handler),
        )
        // Member lifecycle
        .route("/register", post(register_member_handler))
        .route(
            "/members",
            get(list_members_handler).put(update_member_handler),
        )
        .route("/members/verify/:hash", get(verify_member_handler))
        // Payment gateway webhook
        .route("/payments/ipn", post(ipn_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
