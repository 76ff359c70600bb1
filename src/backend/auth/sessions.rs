/**
 * Session Management
 *
 * Server-held sessions referenced by an opaque token. The client only ever
 * sees the token (in a cookie); the server is the sole authority on
 * validity. Tokens are random UUIDs, so a forged token is simply a map miss.
 *
 * # Expiry
 *
 * Sessions use a sliding window: every successful check refreshes the
 * expiry. The clock is injected through the `Clock` trait so expiry can be
 * driven deterministically in tests.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Time source for session expiry.
///
/// Production uses `SystemClock`; tests inject a manual clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One active session.
#[derive(Debug, Clone)]
pub struct Session {
    /// The authenticated user this session belongs to
    pub user_id: Uuid,
    /// Instant after which the session is invalid
    pub expires_at: DateTime<Utc>,
}

/// In-memory session store shared by all request handlers.
///
/// Cloning is cheap; all clones share the same map.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

/// Default session lifetime
const SESSION_TTL_HOURS: i64 = 24;

impl SessionStore {
    /// Create a store with the system clock and the default TTL
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), Duration::hours(SESSION_TTL_HOURS))
    }

    /// Create a store with an injected clock and TTL (used by tests)
    pub fn with_clock(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            clock,
            ttl,
        }
    }

    /// Issue a new session for a user and return the opaque token
    pub fn issue(&self, user_id: Uuid) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            expires_at: self.clock.now() + self.ttl,
        };
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .insert(token.clone(), session);
        token
    }

    /// Check a token and return the session's user on success.
    ///
    /// Total: missing, forged and expired tokens all return `None`, never an
    /// error. A hit refreshes the expiry window; an expired entry is removed.
    pub fn check(&self, token: &str) -> Option<Uuid> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        match sessions.get_mut(token) {
            Some(session) if session.expires_at > now => {
                session.expires_at = now + self.ttl;
                Some(session.user_id)
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Invalidate a session. Idempotent: unknown tokens are ignored.
    pub fn invalidate(&self, token: &str) {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .remove(token);
    }

    /// Drop every expired session. Called from a periodic cleanup task.
    pub fn purge_expired(&self) {
        let now = self.clock.now();
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .retain(|_, session| session.expires_at > now);
    }

    /// Number of live entries, expired or not (for logging)
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock the tests can move by hand
    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(Utc::now()),
            })
        }

        fn advance(&self, delta: Duration) {
            let mut now = self.now.lock().unwrap();
            *now = *now + delta;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[test]
    fn test_issue_and_check() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let token = store.issue(user_id);
        assert_eq!(store.check(&token), Some(user_id));
    }

    #[test]
    fn test_check_missing_token_returns_none() {
        let store = SessionStore::new();
        assert_eq!(store.check("no-such-token"), None);
    }

    #[test]
    fn test_check_forged_token_returns_none() {
        let store = SessionStore::new();
        store.issue(Uuid::new_v4());
        let forged = Uuid::new_v4().to_string();
        assert_eq!(store.check(&forged), None);
    }

    #[test]
    fn test_expired_session_is_rejected_and_removed() {
        let clock = ManualClock::new();
        let store = SessionStore::with_clock(clock.clone(), Duration::hours(1));
        let token = store.issue(Uuid::new_v4());

        clock.advance(Duration::hours(2));
        assert_eq!(store.check(&token), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_check_refreshes_expiry() {
        let clock = ManualClock::new();
        let store = SessionStore::with_clock(clock.clone(), Duration::hours(1));
        let user_id = Uuid::new_v4();
        let token = store.issue(user_id);

        // Keep touching the session just inside the window; it must stay
        // valid well past the original expiry.
        for _ in 0..4 {
            clock.advance(Duration::minutes(50));
            assert_eq!(store.check(&token), Some(user_id));
        }
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let store = SessionStore::new();
        let token = store.issue(Uuid::new_v4());
        store.invalidate(&token);
        store.invalidate(&token);
        assert_eq!(store.check(&token), None);
    }

    #[test]
    fn test_purge_expired_keeps_live_sessions() {
        let clock = ManualClock::new();
        let store = SessionStore::with_clock(clock.clone(), Duration::hours(1));
        let stale = store.issue(Uuid::new_v4());

        clock.advance(Duration::hours(2));
        let live_user = Uuid::new_v4();
        let live = store.issue(live_user);

        store.purge_expired();
        assert_eq!(store.check(&stale), None);
        assert_eq!(store.check(&live), Some(live_user));
        assert_eq!(store.len(), 1);
    }
}
