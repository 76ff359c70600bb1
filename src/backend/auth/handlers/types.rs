/**
 * Authentication Handler Types
 *
 * Request and response types used by the authentication handlers. Field
 * names follow the JSON wire convention (camelCase) the frontend speaks.
 */
use serde::{Deserialize, Serialize};

/// Registration request
///
/// Carries everything the registration form captures, including the
/// signature image drawn by the user.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Government ID number (exactly 10 decimal digits)
    pub id_number: String,
    /// User's chosen username
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, discarded after)
    pub password: String,
    /// Confirmation copy of the password
    pub confirm_password: String,
    /// Captured signature image as an opaque encoding
    pub signature: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    /// User's username
    pub username: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Generic success response for register/login/logout/submit
#[derive(Serialize, Deserialize, Debug)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Session check response; never an error shape
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_authenticated: bool,
}

/// User profile response (without sensitive data)
///
/// Never includes the password hash. The signature image is omitted as
/// well; it is only consulted when rendering a finished inspection record.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Government ID number
    pub id_number: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}
