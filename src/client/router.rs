/**
 * Session-Gated Route Reducer
 *
 * Decides, per navigation, whether the requested view needs an
 * authenticated session. Protected targets pass through a `Checking` state
 * (the shell shows a loading placeholder) while the session check is on
 * the wire; a negative answer redirects to login while preserving the
 * originally requested route for the post-login redirect.
 *
 * Public views (login, register) always render without a check.
 *
 * The reducer is pure: the shell navigates, calls the API client, and
 * feeds the result back as an event.
 */
use serde::{Deserialize, Serialize};

/// The application's views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Login view (public)
    Login,
    /// Registration view (public)
    Register,
    /// Form listing dashboard (protected)
    Dashboard,
    /// Fill out one form (protected)
    Form(String),
    /// Reorder one form's fields (protected)
    Builder(String),
}

impl Route {
    /// Whether this view requires an authenticated session
    pub fn is_protected(&self) -> bool {
        match self {
            Route::Login | Route::Register => false,
            Route::Dashboard | Route::Form(_) | Route::Builder(_) => true,
        }
    }
}

/// Gate state the shell renders from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// No navigation yet
    Idle,
    /// Session check in flight; show a loading placeholder
    Checking { target: Route },
    /// Render the target view
    Granted { target: Route },
    /// Redirect to login; `return_to` is the view to restore after login
    Denied { return_to: Route },
}

/// Events the gate consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateEvent {
    /// The user navigated to a view
    Navigate(Route),
    /// The session check resolved
    SessionChecked { is_authenticated: bool },
}

/// Pure transition function for the session gate
pub fn reduce(state: GateState, event: GateEvent) -> GateState {
    match event {
        GateEvent::Navigate(target) => {
            if target.is_protected() {
                GateState::Checking { target }
            } else {
                GateState::Granted { target }
            }
        }
        GateEvent::SessionChecked { is_authenticated } => match state {
            GateState::Checking { target } => {
                if is_authenticated {
                    GateState::Granted { target }
                } else {
                    GateState::Denied { return_to: target }
                }
            }
            // A late check result with no pending navigation changes nothing.
            other => other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_views_skip_the_check() {
        for route in [Route::Login, Route::Register] {
            let state = reduce(GateState::Idle, GateEvent::Navigate(route.clone()));
            assert_eq!(state, GateState::Granted { target: route });
        }
    }

    #[test]
    fn test_protected_view_waits_for_check() {
        let state = reduce(
            GateState::Idle,
            GateEvent::Navigate(Route::Form("site-safety".to_string())),
        );
        assert_eq!(
            state,
            GateState::Checking {
                target: Route::Form("site-safety".to_string())
            }
        );
    }

    #[test]
    fn test_valid_session_grants_the_target() {
        let checking = GateState::Checking {
            target: Route::Dashboard,
        };
        let state = reduce(
            checking,
            GateEvent::SessionChecked {
                is_authenticated: true,
            },
        );
        assert_eq!(
            state,
            GateState::Granted {
                target: Route::Dashboard
            }
        );
    }

    #[test]
    fn test_denied_preserves_requested_route() {
        let checking = GateState::Checking {
            target: Route::Builder("site-safety".to_string()),
        };
        let state = reduce(
            checking,
            GateEvent::SessionChecked {
                is_authenticated: false,
            },
        );
        // The originally requested view is kept for the post-login redirect.
        assert_eq!(
            state,
            GateState::Denied {
                return_to: Route::Builder("site-safety".to_string())
            }
        );
    }

    #[test]
    fn test_late_check_result_is_ignored() {
        let granted = GateState::Granted {
            target: Route::Login,
        };
        let state = reduce(
            granted.clone(),
            GateEvent::SessionChecked {
                is_authenticated: false,
            },
        );
        assert_eq!(state, granted);
    }

    #[test]
    fn test_new_navigation_supersedes_denial() {
        let denied = GateState::Denied {
            return_to: Route::Dashboard,
        };
        let state = reduce(denied, GateEvent::Navigate(Route::Login));
        assert_eq!(
            state,
            GateState::Granted {
                target: Route::Login
            }
        );
    }
}
