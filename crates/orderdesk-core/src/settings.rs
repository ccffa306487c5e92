//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Entry
//! points build them from defaults plus command-line/environment overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{FIXTURE_CLIENT_PHONE, Route};

/// Minimum number of characters a phone number must have.
pub const DEFAULT_MIN_IDENTIFIER_LEN: usize = 10;

/// Simulated backend round-trip applied to every login attempt.
pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 1000;

/// Upper bound on reading the stored session at startup.
pub const DEFAULT_RESTORE_TIMEOUT_MS: u64 = 3000;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Identifiers shorter than this fail with `InvalidFormat`.
    pub min_identifier_len: usize,

    /// The one identifier accepted by login.
    pub known_identifier: String,

    /// Artificial delay before a login attempt is evaluated.
    pub login_latency_ms: u64,

    /// How long `restore_session` may take before falling back to signed-out.
    pub restore_timeout_ms: u64,

    /// Where authenticated users land when leaving the login surface.
    pub landing_route: Route,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            min_identifier_len: DEFAULT_MIN_IDENTIFIER_LEN,
            known_identifier: FIXTURE_CLIENT_PHONE.to_string(),
            login_latency_ms: DEFAULT_LOGIN_LATENCY_MS,
            restore_timeout_ms: DEFAULT_RESTORE_TIMEOUT_MS,
            landing_route: Route::Dashboard,
        }
    }

    /// Defaults without artificial latency, for tests and scripted use.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            login_latency_ms: 0,
            ..Self::with_defaults()
        }
    }

    pub const fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub const fn restore_timeout(&self) -> Duration {
        Duration::from_millis(self.restore_timeout_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Minimum identifier length must be at least 1, got {0}")]
    InvalidMinLength(usize),

    #[error("Known identifier must satisfy the minimum length ({min}), got {len} characters")]
    KnownIdentifierTooShort { min: usize, len: usize },

    #[error("Restore timeout must be greater than zero")]
    ZeroRestoreTimeout,

    #[error("Landing route cannot be the login screen")]
    LandingOnLogin,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.min_identifier_len == 0 {
        return Err(SettingsError::InvalidMinLength(0));
    }

    let len = settings.known_identifier.trim().chars().count();
    if len < settings.min_identifier_len {
        return Err(SettingsError::KnownIdentifierTooShort {
            min: settings.min_identifier_len,
            len,
        });
    }

    if settings.restore_timeout_ms == 0 {
        return Err(SettingsError::ZeroRestoreTimeout);
    }

    if settings.landing_route.is_auth_group() {
        return Err(SettingsError::LandingOnLogin);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.min_identifier_len, 10);
        assert_eq!(settings.known_identifier, "+1234567890");
        assert_eq!(settings.login_latency(), Duration::from_secs(1));
        assert_eq!(settings.landing_route, Route::Dashboard);
    }

    #[test]
    fn test_validate_settings_valid() {
        assert!(validate_settings(&Settings::with_defaults()).is_ok());
        assert!(validate_settings(&Settings::immediate()).is_ok());
    }

    #[test]
    fn test_validate_known_identifier_too_short() {
        let settings = Settings {
            known_identifier: "+123".to_string(),
            ..Settings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::KnownIdentifierTooShort { min: 10, len: 4 })
        ));
    }

    #[test]
    fn test_validate_landing_on_login() {
        let settings = Settings {
            landing_route: Route::Login,
            ..Settings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::LandingOnLogin)
        ));
    }

    #[test]
    fn test_validate_zero_values() {
        let zero_len = Settings {
            min_identifier_len: 0,
            ..Settings::with_defaults()
        };
        assert!(validate_settings(&zero_len).is_err());

        let zero_timeout = Settings {
            restore_timeout_ms: 0,
            ..Settings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&zero_timeout),
            Err(SettingsError::ZeroRestoreTimeout)
        ));
    }
}
