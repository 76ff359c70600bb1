/**
 * Registration Handler
 *
 * This module implements the account registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate every field (all violations are collected and reported)
 * 2. Hash the password using bcrypt
 * 3. Create the user in the database
 *
 * Validation runs strictly before any persistence attempt; an invalid
 * request never touches the database. The plaintext password exists only
 * inside this request and is discarded right after hashing.
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Neither the plaintext nor the hash is ever logged
 * - Duplicate username/email/idNumber answers 409 naming the field
 */
use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{RegisterRequest, SuccessResponse};
use crate::backend::auth::users::create_user;
use crate::backend::auth::validation::validate_registration;
use crate::backend::error::ApiError;

/// Registration handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request with all form fields
///
/// # Returns
///
/// `{"success": true}` on success
///
/// # Errors
///
/// * `400 Bad Request` - validation failed; response lists every violation
/// * `409 Conflict` - username, email or idNumber already registered
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    // Validation first; the database is never consulted for an invalid
    // request, and every violation is reported at once.
    let errors = validate_registration(&request);
    if !errors.is_empty() {
        tracing::warn!(
            "Registration for {} rejected with {} validation error(s)",
            request.username,
            errors.len()
        );
        return Err(ApiError::Validation { errors });
    }

    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::Unavailable
    })?;

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        request.id_number,
        request.username,
        request.email,
        password_hash,
        request.signature,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(Json(SuccessResponse::ok()))
}
