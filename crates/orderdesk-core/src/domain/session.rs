//! Authentication state, credentials and the persisted session token.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Authentication state machine.
///
/// ```text
///   Authenticating ──restore──▶ Authenticated | Unauthenticated
///   Unauthenticated ──login ok──▶ Authenticated
///   Authenticated ──logout──▶ Unauthenticated
/// ```
///
/// The controller starts in `Authenticating` until the stored session has
/// been read, so nothing routes on an unresolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl AuthState {
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Whether a decision is still pending (initial restore or login in flight).
    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Authenticating)
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
        };
        f.write_str(label)
    }
}

/// Snapshot of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
}

/// A submitted phone-number identifier.
///
/// Only lives for the duration of a login attempt; what gets persisted is the
/// derived [`SessionToken`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive the opaque token stored after a successful login.
    pub fn token(&self) -> SessionToken {
        let digest = Sha256::digest(self.0.as_bytes());
        let hex = digest.iter().fold(String::with_capacity(64), |mut acc, byte| {
            use std::fmt::Write;
            let _ = write!(acc, "{byte:02x}");
            acc
        });
        SessionToken(hex)
    }
}

// Keep phone numbers out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Opaque persisted session token (lowercase hex SHA-256 of the identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub const LEN: usize = 64;

    /// Parse a stored value, rejecting anything that is not a well-formed token.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
