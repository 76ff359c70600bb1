/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/user, which returns the
 * profile of the currently authenticated user.
 *
 * # Response
 *
 * Returns the user record minus sensitive data: no password hash, and the
 * stored signature image is not echoed back either.
 */
use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::require_session;
use crate::backend::server::state::AppState;

/// Current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no valid session
/// * `404 Not Found` - session points at a user that no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = require_session(&state.sessions, &headers)?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;

    let user = get_user_by_id(pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Session user not found: {}", user_id);
            ApiError::not_found("user")
        })?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        id_number: user.id_number,
        username: user.username,
        email: user.email,
    }))
}
