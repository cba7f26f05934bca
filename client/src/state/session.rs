//! Session-gate state for protected admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<GateState>` context from `App`. The admin layout
//! re-derives it from the session store on every mount and on cross-tab
//! storage notifications; nothing else writes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::session_store::{SessionMarker, SessionStore};
use crate::util::storage::KeyValueStore;

/// Label shown when no usable identity is available.
pub const FALLBACK_IDENTITY: &str = "Admin";

/// Result of the most recent gate evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// No evaluation has completed yet (initial, and during SSR).
    #[default]
    Unknown,
    /// A marker was present on the last read.
    Authorized(SessionMarker),
    /// No usable marker on the last read.
    Denied,
}

impl GateState {
    /// Derive the state from a fresh read of `store`.
    pub fn evaluate<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        store.read().map_or(Self::Denied, Self::Authorized)
    }

    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// The session token, when authorized.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authorized(marker) => Some(marker.token.as_str()),
            _ => None,
        }
    }

    /// Email to display for the signed-in admin, or [`FALLBACK_IDENTITY`].
    #[must_use]
    pub fn display_identity(&self) -> String {
        match self {
            Self::Authorized(marker) if !marker.user.email.trim().is_empty() => marker.user.email.clone(),
            _ => FALLBACK_IDENTITY.to_owned(),
        }
    }
}
