/**
 * Session Extraction
 *
 * Protected handlers receive the whole request's headers and ask this module
 * whether they belong to a live session. The token travels in the `session`
 * cookie set at login; an `Authorization: Bearer` header is accepted as a
 * fallback for non-browser clients.
 */
use axum::http::{header, HeaderMap};
use uuid::Uuid;

use crate::backend::auth::sessions::SessionStore;
use crate::backend::error::ApiError;

/// Name of the session cookie issued at login
pub const SESSION_COOKIE: &str = "session";

/// Extract the session token from request headers.
///
/// Checks the `Cookie` header first, then falls back to a Bearer token.
/// Returns `None` when neither carries a token.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|h| h.to_str().ok()) {
        for pair in cookies.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}

/// Require a live session for the current request.
///
/// # Returns
/// The authenticated user's ID, or `ApiError::Unauthorized` when the request
/// carries no token or the token is not (or no longer) valid.
pub fn require_session(sessions: &SessionStore, headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let token = session_token(headers).ok_or_else(|| {
        tracing::debug!("Request without session token on protected endpoint");
        ApiError::Unauthorized
    })?;

    sessions.check(&token).ok_or_else(|| {
        tracing::debug!("Invalid or expired session token");
        ApiError::Unauthorized
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_token_from_session_cookie() {
        let headers = headers_with(header::COOKIE, "session=abc123");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_from_cookie_among_others() {
        let headers = headers_with(header::COOKIE, "theme=dark; session=abc123; lang=en");
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_from_bearer_fallback() {
        let headers = headers_with(header::AUTHORIZATION, "Bearer tok-1");
        assert_eq!(session_token(&headers), Some("tok-1".to_string()));
    }

    #[test]
    fn test_no_token() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        let headers = headers_with(header::COOKIE, "theme=dark");
        assert_eq!(session_token(&headers), None);
        let headers = headers_with(header::COOKIE, "session=");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_require_session_accepts_live_token() {
        let sessions = SessionStore::new();
        let user_id = Uuid::new_v4();
        let token = sessions.issue(user_id);
        let headers = headers_with(header::COOKIE, &format!("session={}", token));
        assert_eq!(require_session(&sessions, &headers).unwrap(), user_id);
    }

    #[test]
    fn test_require_session_rejects_missing_and_forged() {
        let sessions = SessionStore::new();
        let result = require_session(&sessions, &HeaderMap::new());
        assert!(matches!(result, Err(ApiError::Unauthorized)));

        let headers = headers_with(header::COOKIE, "session=forged");
        let result = require_session(&sessions, &headers);
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
