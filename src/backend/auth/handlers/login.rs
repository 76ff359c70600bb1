/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password using bcrypt
 * 3. Issue a server-held session and set the session cookie
 *
 * # Security
 *
 * - Unknown user and wrong password produce the identical 401 response,
 *   so a caller cannot enumerate accounts
 * - Password verification uses bcrypt's constant-time comparison
 * - Neither the plaintext nor the stored hash is ever logged or returned
 */
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, Json},
};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, SuccessResponse};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::SESSION_COOKIE;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and session store)
/// * `Json(request)` - Login request containing username and password
///
/// # Returns
///
/// `{"success": true}` with a `Set-Cookie` header carrying the opaque
/// session token
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password (same response)
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - database or verification failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<SuccessResponse>), ApiError>
{
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.username);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed for: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.sessions.issue(user.id);
    tracing::info!("User logged in successfully: {}", user.username);

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(SuccessResponse::ok()),
    ))
}
