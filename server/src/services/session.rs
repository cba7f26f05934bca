//! In-memory admin session registry.
//!
//! ARCHITECTURE
//! ============
//! A successful login issues an opaque random token that the client keeps in
//! browser storage and sends as a bearer token on every mutation. Tokens
//! expire after a fixed TTL and can be revoked on sign-out.
//!
//! TRADE-OFFS
//! ==========
//! Sessions are process-local, so a restart signs every admin out. The client
//! treats the resulting 401 as a sign-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use rand::Rng;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Identity bound to a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub email: String,
}

struct SessionEntry {
    identity: AdminIdentity,
    expires_at: Instant,
}

#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), ttl }
    }

    /// Register a new session for `email` and return its token.
    pub fn issue(&self, email: &str) -> String {
        self.issue_at(email, Instant::now())
    }

    fn issue_at(&self, email: &str, now: Instant) -> String {
        let token = generate_token();
        let mut sessions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            token.clone(),
            SessionEntry { identity: AdminIdentity { email: email.to_owned() }, expires_at: now + self.ttl },
        );
        token
    }

    /// Identity for a live `token`, or `None` if unknown or expired.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<AdminIdentity> {
        self.validate_at(token, Instant::now())
    }

    fn validate_at(&self, token: &str, now: Instant) -> Option<AdminIdentity> {
        let mut sessions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(token) {
            Some(entry) if entry.expires_at > now => Some(entry.identity.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Drop `token`. Returns whether it was registered.
    pub fn revoke(&self, token: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
