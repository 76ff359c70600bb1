/**
 * Session Check Handler
 *
 * This module implements the handler for GET /api/auth/check. It is the one
 * endpoint the client's session-gated router calls before rendering a
 * protected view.
 *
 * # Contract
 *
 * The check is total: it never errors. A missing, forged or expired token
 * simply answers `{"isAuthenticated": false}`. A valid token answers `true`
 * and refreshes the session's expiry window as a side effect.
 */
use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::handlers::types::CheckResponse;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::middleware::auth::session_token;

/// Session check handler; infallible by design
pub async fn check(
    State(sessions): State<SessionStore>,
    headers: HeaderMap,
) -> Json<CheckResponse> {
    let is_authenticated = session_token(&headers)
        .map(|token| sessions.check(&token).is_some())
        .unwrap_or(false);

    Json(CheckResponse { is_authenticated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_check_without_token() {
        let sessions = SessionStore::new();
        let response = check(State(sessions), HeaderMap::new()).await;
        assert!(!response.is_authenticated);
    }

    #[tokio::test]
    async fn test_check_forged_token() {
        let sessions = SessionStore::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=forged-token"),
        );
        let response = check(State(sessions), headers).await;
        assert!(!response.is_authenticated);
    }

    #[tokio::test]
    async fn test_check_valid_token() {
        let sessions = SessionStore::new();
        let token = sessions.issue(Uuid::new_v4());
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("session={}", token)).unwrap(),
        );
        let response = check(State(sessions), headers).await;
        assert!(response.is_authenticated);
    }
}
