/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Users are created
 * at registration and never mutated afterwards; deletion is an external
 * admin action outside this application.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::error::ApiError;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Government ID number (exactly 10 decimal digits, unique)
    pub id_number: String,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Captured signature image, stored as an opaque encoding
    pub signature_image: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id_number` - 10-digit government ID number
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password (never the plaintext)
/// * `signature_image` - Opaque encoded signature image
///
/// # Returns
/// Created user, or `ApiError::Duplicate` naming the offending field when a
/// unique constraint is violated
pub async fn create_user(
    pool: &PgPool,
    id_number: String,
    username: String,
    email: String,
    password_hash: String,
    signature_image: String,
) -> Result<User, ApiError> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, id_number, username, email, password_hash, signature_image, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, id_number, username, email, password_hash, signature_image, created_at
        "#,
    )
    .bind(id)
    .bind(&id_number)
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(&signature_image)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(map_unique_violation)?;

    Ok(user)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, id_number, username, email, password_hash, signature_image, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(
    pool: &PgPool,
    id: uuid::Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, id_number, username, email, password_hash, signature_image, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Map a Postgres unique-constraint violation onto the request field it
/// protects. Anything else passes through as a database error.
fn map_unique_violation(err: sqlx::Error) -> ApiError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            let field = match db_err.constraint() {
                Some("users_username_key") => "username",
                Some("users_email_key") => "email",
                Some("users_id_number_key") => "idNumber",
                _ => "account",
            };
            return ApiError::Duplicate {
                field: field.to_string(),
            };
        }
    }
    ApiError::Database(err)
}
