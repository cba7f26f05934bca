//! Persisted admin session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the marker after the server accepts the admin
//! credential, the session gate reads it on every protected mount, and
//! sign-out clears it. This module exclusively owns the persisted bytes.
//!
//! DESIGN
//! ======
//! One canonical marker shape: a non-empty token plus a `{ email }` user
//! record, stored under two keys that are always written and cleared
//! together. A half-written or unparseable marker reads as absent.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use serde::{Deserialize, Serialize};

use super::storage::{BrowserStore, KeyValueStore};

/// Storage key for the opaque server-issued session token.
pub const TOKEN_KEY: &str = "adminToken";
/// Storage key for the serialized session user.
pub const USER_KEY: &str = "adminUser";
/// Key written by older builds. Never read; removed on clear.
pub const LEGACY_TOKEN_KEY: &str = "adminAuthToken";

/// Identity stored alongside the session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

/// Evidence that an admin session is active in this browser profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionMarker {
    pub token: String,
    pub user: SessionUser,
}

impl SessionMarker {
    #[must_use]
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self { token: token.into(), user: SessionUser { email: email.into() } }
    }
}

/// Returns `true` if `key` is one of the keys this store manages.
#[must_use]
pub fn is_session_key(key: &str) -> bool {
    key == TOKEN_KEY || key == USER_KEY || key == LEGACY_TOKEN_KEY
}

/// Read/write/clear access to the session marker over any `KeyValueStore`.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl SessionStore<BrowserStore> {
    /// Session store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Persist `marker`. Writing the same marker twice leaves the same state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either storage write fails. A
    /// failed write leaves no partial marker behind.
    pub fn write(&self, marker: &SessionMarker) -> Result<(), String> {
        let user = serde_json::to_string(&marker.user).map_err(|e| e.to_string())?;
        let result = self
            .backend
            .set(TOKEN_KEY, &marker.token)
            .and_then(|()| self.backend.set(USER_KEY, &user));
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// Current marker, or `None` when unset, partial, or malformed.
    pub fn read(&self) -> Option<SessionMarker> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.backend.get(USER_KEY)?;
        let user = serde_json::from_str::<SessionUser>(&raw_user).ok()?;
        Some(SessionMarker { token, user })
    }

    /// Remove every session key.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(LEGACY_TOKEN_KEY);
    }
}
