/**
 * Per-IP Rate Limiting
 *
 * Fixed-window request limiter keyed by client IP, applied globally to the
 * router. The default budget is 100 requests per 15-minute window; the
 * 101st request within a window receives 429 Too Many Requests.
 *
 * The client key prefers the `X-Forwarded-For` header (first hop) so the
 * limiter works behind a reverse proxy, and falls back to the socket peer
 * address.
 */
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::backend::error::ApiError;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u64,
    /// Window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

/// Per-key window state.
#[derive(Debug, Clone)]
struct WindowState {
    count: u64,
    window_start: Instant,
}

/// Shared rate limiter state. Clones share the same counters.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Arc<RwLock<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check whether a request from the given key is within budget.
    ///
    /// Counts the request when allowed.
    pub fn check(&self, key: &str) -> bool {
        let mut windows = self.windows.write().expect("rate limit lock poisoned");
        let now = Instant::now();

        let window = windows.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        if now.duration_since(window.window_start) >= self.config.window {
            window.count = 0;
            window.window_start = now;
        }

        if window.count >= self.config.max_requests {
            false
        } else {
            window.count += 1;
            true
        }
    }

    /// Drop windows whose budget period has fully elapsed.
    ///
    /// Called from the periodic cleanup task so the map does not grow
    /// unboundedly with distinct client IPs.
    pub fn purge_stale(&self) {
        let now = Instant::now();
        let window = self.config.window;
        self.windows
            .write()
            .expect("rate limit lock poisoned")
            .retain(|_, w| now.duration_since(w.window_start) < window);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

/// Derive the limiter key for a request
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware that enforces the per-IP request budget on every route
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if !limiter.check(&key) {
        tracing::warn!("Rate limit exceeded for {}", key);
        return ApiError::RateLimited.into_response();
    }

    next.run(request).await
}
