/**
 * Router Configuration
 *
 * Combines the API route configuration into the single Axum router the
 * server serves. Protective layers (CORS, security headers, rate limiting)
 * are applied around this router in `server::init` so they cover every
 * route uniformly.
 */
use axum::http::StatusCode;
use axum::Router;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, sessions, limiter)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router);

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
