/**
 * Registration Validation
 *
 * Validates every registration field before any persistence attempt and
 * reports every violation, not just the first. The rules match what the
 * registration form promises the user:
 *
 * - `idNumber`: exactly 10 decimal digits
 * - `email`: standard local@domain.tld shape
 * - `password`: minimum 8 characters with at least one lowercase letter,
 *   one uppercase letter, one digit and one symbol from `PASSWORD_SYMBOLS`
 * - `confirmPassword`: must equal `password`
 * - `signature`: a captured image must be present
 */
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::error::FieldError;

/// Punctuation accepted as the "symbol" character class in passwords
pub const PASSWORD_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Minimum password length
const MIN_PASSWORD_LEN: usize = 8;

/// Validate a registration request.
///
/// Returns the empty vector when every field passes. The caller must not
/// touch the database before this returns empty.
pub fn validate_registration(request: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_id_number(&request.id_number) {
        errors.push(FieldError::new(
            "idNumber",
            "must be exactly 10 digits",
        ));
    }

    if !is_valid_email(&request.email) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }

    errors.extend(password_violations(&request.password));

    if request.confirm_password != request.password {
        errors.push(FieldError::new(
            "confirmPassword",
            "must match the password",
        ));
    }

    if request.signature.trim().is_empty() {
        errors.push(FieldError::new("signature", "a signature is required"));
    }

    errors
}

/// Exactly 10 ASCII decimal digits
fn is_valid_id_number(id_number: &str) -> bool {
    id_number.len() == 10 && id_number.chars().all(|c| c.is_ascii_digit())
}

/// local@domain.tld shape: non-empty local part, a single `@`, and a domain
/// with a dot that is neither leading nor trailing
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Every password rule the candidate breaks
fn password_violations(password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "must be at least 8 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new(
            "password",
            "must contain a lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "must contain an uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("password", "must contain a digit"));
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        errors.push(FieldError::new("password", "must contain a symbol"));
    }

    errors
}
