use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login credentials for the remote service.
///
/// Immutable once constructed; the dispatcher shares them read-only across
/// its workers. The secret is wiped from memory when the value is dropped and
/// is never included in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: String,
    secret: String,
    domain: String,
}

impl Credentials {
    /// Creates a credential set for `username` on `domain`.
    pub fn new(
        username: impl Into<String>,
        secret: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
            domain: domain.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}
