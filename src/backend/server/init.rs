/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * state creation, database loading, template seeding, route configuration
 * and the protective layers (CORS, security headers, rate limiting).
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool
 * 2. Seed the default inspection templates when the table is empty
 * 3. Build the application state (sessions, rate limiter)
 * 4. Assemble the router with its layers
 * 5. Spawn the periodic cleanup task (sessions, limiter windows)
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database or a failed seed is
 * logged and the server starts anyway.
 */
use axum::http::{header, HeaderValue, Method};
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::backend::forms::templates::seed_default_templates;
use crate::backend::middleware::rate_limit::rate_limit_middleware;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{frontend_origin, load_database};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Loads the database, seeds templates, builds default state and returns
/// the fully-layered router.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing inspecta backend server");

    let db_pool = load_database().await;

    if let Some(pool) = &db_pool {
        if let Err(e) = seed_default_templates(pool).await {
            tracing::error!("Failed to seed default templates: {:?}", e);
            tracing::warn!("Continuing without seeded templates");
        }
    }

    let app_state = AppState::new(db_pool);

    // Periodic cleanup keeps the session map from accumulating expired
    // entries and the rate limiter from accumulating windows for client
    // IPs that never return.
    let cleanup_sessions = app_state.sessions.clone();
    let cleanup_limiter = app_state.limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            cleanup_sessions.purge_expired();
            cleanup_limiter.purge_stale();
            tracing::debug!("Purged expired sessions ({} live)", cleanup_sessions.len());
        }
    });

    tracing::info!("Session store and cleanup task initialized");

    create_app_with_state(app_state)
}

/// Assemble the router and layers around an existing state.
///
/// Split out from `create_app` so tests can run the full stack against an
/// in-memory state without a database.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    let router = create_router(app_state.clone());

    // The limiter must be the innermost of these layers: a 429 it
    // short-circuits still travels out through the header and CORS layers,
    // so the browser frontend can read the refusal.
    router.layer(
        ServiceBuilder::new()
            .layer(cors_layer())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(middleware::from_fn_with_state(
                app_state,
                rate_limit_middleware,
            )),
    )
}

/// CORS restricted to the configured frontend origin, with credentialed
/// requests enabled so the session cookie travels.
fn cors_layer() -> CorsLayer {
    let origin = frontend_origin();
    let origin = match origin.parse::<HeaderValue>() {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Invalid FRONTEND_ORIGIN {:?}: {}", origin, e);
            HeaderValue::from_static("http://localhost:5173")
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
