//! Admin credential check against the configured shared secret.
//!
//! DESIGN
//! ======
//! Both sides are reduced to SHA-256 digests and compared without early
//! exit, so timing does not depend on how much of the candidate matches.
//! An unset or empty secret fails closed for every input.

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;

use sha2::{Digest, Sha256};

type SecretDigest = [u8; 32];

fn digest(value: &str) -> SecretDigest {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

fn digests_equal(a: &SecretDigest, b: &SecretDigest) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[derive(Clone)]
pub struct CredentialChecker {
    expected: Option<SecretDigest>,
}

impl CredentialChecker {
    /// Checker for `secret`. `None` or `""` means not configured.
    #[must_use]
    pub fn new(secret: Option<&str>) -> Self {
        Self { expected: secret.filter(|s| !s.is_empty()).map(digest) }
    }

    /// Checker for `ADMIN_SECRET`.
    #[must_use]
    pub fn from_env() -> Self {
        let secret = std::env::var("ADMIN_SECRET").ok();
        let checker = Self::new(secret.as_deref());
        if !checker.is_configured() {
            tracing::warn!("ADMIN_SECRET not set; every admin login will be rejected");
        }
        checker
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Exact, case-sensitive match against the configured secret.
    #[must_use]
    pub fn check(&self, candidate: &str) -> bool {
        let Some(expected) = &self.expected else {
            return false;
        };
        digests_equal(expected, &digest(candidate))
    }
}

impl std::fmt::Debug for CredentialChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialChecker")
            .field("configured", &self.is_configured())
            .finish()
    }
}
