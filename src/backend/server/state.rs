/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container:
 * - Optional PostgreSQL connection pool (persistence)
 * - Session store (shared, in-memory, keyed by opaque token)
 * - Rate limiter (shared counters keyed by client IP)
 *
 * # Thread Safety
 *
 * Everything here is clone-cheap and shares interior state across clones:
 * the pool, the session map and the limiter counters are each behind their
 * own `Arc`. Request handling stays stateless apart from these two shared
 * structures, exactly the resource model the application needs.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they use: the check/logout handlers take a `SessionStore`, the
 * registration handler takes an `Option<PgPool>`, and so on.
 */
use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionStore;
use crate::backend::middleware::rate_limit::RateLimiter;

/// Central application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g. `DATABASE_URL`
    /// is unset). Handlers check for `None` and answer 503.
    pub db_pool: Option<PgPool>,

    /// Server-held sessions, keyed by the opaque token the client carries
    pub sessions: SessionStore,

    /// Per-IP request budget counters
    pub limiter: RateLimiter,
}

impl AppState {
    /// State with a database pool and default session/limit settings
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self {
            db_pool,
            sessions: SessionStore::new(),
            limiter: RateLimiter::default(),
        }
    }
}

/// Lets handlers extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets session-only handlers (check, logout) skip the rest of the state
impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

/// Lets the rate-limit middleware run off the shared counters
impl FromRef<AppState> for RateLimiter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.limiter.clone()
    }
}
