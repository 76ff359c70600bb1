/**
 * Logout Handler
 *
 * This module implements the handler for POST /api/auth/logout. It
 * invalidates the server-held session and clears the client's cookie.
 * Logging out twice is not an error; the second call is a no-op that still
 * answers 200.
 */
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    http::HeaderMap,
    response::{AppendHeaders, Json},
};

use crate::backend::auth::handlers::types::SuccessResponse;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::middleware::auth::{session_token, SESSION_COOKIE};

/// Logout handler; idempotent
pub async fn logout(
    State(sessions): State<SessionStore>,
    headers: HeaderMap,
) -> (AppendHeaders<[(axum::http::HeaderName, String); 1]>, Json<SuccessResponse>) {
    if let Some(token) = session_token(&headers) {
        sessions.invalidate(&token);
        tracing::info!("Session invalidated");
    }

    // Expire the cookie regardless of whether a session existed.
    let clear = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    );

    (AppendHeaders([(SET_COOKIE, clear)]), Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let sessions = SessionStore::new();
        let token = sessions.issue(Uuid::new_v4());
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("session={}", token)).unwrap(),
        );

        let (_, response) = logout(State(sessions.clone()), headers.clone()).await;
        assert!(response.success);
        assert_eq!(sessions.check(&token), None);

        // Second logout with the same token is still a success
        let (_, response) = logout(State(sessions), headers).await;
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let sessions = SessionStore::new();
        let (_, response) = logout(State(sessions), HeaderMap::new()).await;
        assert!(response.success);
    }
}
