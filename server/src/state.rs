//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the conference store, the admin credential checker, the live
//! admin sessions, and the login attempt limiter.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limit::LoginRateLimiter;
use crate::services::conference::ConferenceStore;
use crate::services::credential::CredentialChecker;
use crate::services::session::SessionRegistry;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub conferences: Arc<dyn ConferenceStore>,
    pub credentials: CredentialChecker,
    pub sessions: SessionRegistry,
    pub login_limiter: LoginRateLimiter,
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig, conferences: Arc<dyn ConferenceStore>, credentials: CredentialChecker) -> Self {
        Self {
            conferences,
            credentials,
            sessions: SessionRegistry::new(config.session_ttl),
            login_limiter: LoginRateLimiter::new(config.login_rate_limit, config.login_rate_window),
            trust_forwarded_for: config.trust_forwarded_for,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
