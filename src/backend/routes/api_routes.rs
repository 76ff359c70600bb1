/**
 * API Route Handlers
 *
 * This module wires the API endpoints onto the router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - account creation
 * - `POST /api/auth/login` - credential verification + session cookie
 * - `GET /api/auth/check` - session validity (never errors)
 * - `POST /api/auth/logout` - idempotent session invalidation
 * - `GET /api/user` - current user profile (requires session)
 *
 * ## Forms
 * - `GET /api/forms` - template name listing
 * - `GET /api/forms/{form_name}` - template fetch
 * - `PUT /api/forms/{form_name}` - builder save (requires session)
 * - `POST /api/forms/{form_name}/submit` - submission storage
 */
use axum::Router;

use crate::backend::auth::{check, get_me, login, logout, register};
use crate::backend::forms::{get_form, list_forms, save_form, submit_form};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Session requirements are enforced inside the handlers (`/api/user` and
/// the builder save); everything else is public. The global rate limiter
/// wraps all of these in `server::init`.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/check", axum::routing::get(check))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/user", axum::routing::get(get_me))
        // Form endpoints
        .route("/api/forms", axum::routing::get(list_forms))
        .route(
            "/api/forms/{form_name}",
            axum::routing::get(get_form).put(save_form),
        )
        .route(
            "/api/forms/{form_name}/submit",
            axum::routing::post(submit_form),
        )
}
