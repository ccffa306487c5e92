//! Auth controller - the authentication state machine.
//!
//! ```text
//!   (start) Authenticating ──restore_session──▶ Authenticated | Unauthenticated
//!   Unauthenticated ──login ok──▶ Authenticated
//!   Unauthenticated ──login err──▶ Unauthenticated (error surfaced)
//!   Authenticated ──logout──▶ Unauthenticated
//! ```
//!
//! Login is single-flight: a second attempt while one is pending fails with
//! [`AuthError::AlreadyInProgress`]. Login, logout and restore are sequenced
//! through one async operation lock, so their storage writes never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::domain::{AuthState, Credential, Session};
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, KeyValueStore};
use crate::settings::Settings;

use super::session_store::{SessionStore, StoredSession};

/// Errors surfaced to the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identifier is empty or shorter than the minimum length.
    #[error("Invalid phone number")]
    InvalidFormat,

    /// The identifier is well-formed but unknown.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Another login attempt has not finished yet.
    #[error("A sign-in is already in progress")]
    AlreadyInProgress,

    /// The session token could not be persisted.
    #[error("Session could not be saved: {0}")]
    Storage(String),
}

impl AuthError {
    /// Catalog key of the user-facing message.
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "auth.errors.invalidFormat",
            Self::InvalidCredentials => "auth.errors.invalidCredentials",
            Self::AlreadyInProgress => "auth.errors.inProgress",
            Self::Storage(_) => "auth.errors.storage",
        }
    }
}

#[derive(Debug)]
struct AuthInner {
    state: AuthState,
    login_in_flight: bool,
    /// State to fall back to when the pending login fails.
    fallback: AuthState,
}

/// Owns [`AuthState`] and every transition of it.
pub struct AuthController {
    sessions: SessionStore,
    settings: Settings,
    inner: Mutex<AuthInner>,
    op_lock: tokio::sync::Mutex<()>,
    events: Arc<dyn AppEventEmitter>,
}

impl AuthController {
    /// Create a controller in the unresolved (`Authenticating`) state.
    ///
    /// Call [`restore_session`](Self::restore_session) once before routing.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        settings: Settings,
        events: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            sessions: SessionStore::new(store),
            settings,
            inner: Mutex::new(AuthInner {
                state: AuthState::Authenticating,
                login_in_flight: false,
                fallback: AuthState::Unauthenticated,
            }),
            op_lock: tokio::sync::Mutex::new(()),
            events,
        }
    }

    pub fn state(&self) -> AuthState {
        self.lock().state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn session(&self) -> Session {
        Session {
            authenticated: self.is_authenticated(),
        }
    }

    /// Read the persisted session and settle the initial state.
    ///
    /// Bounded by the configured restore timeout; a timeout, a read error or
    /// a malformed entry all resolve to `Unauthenticated`.
    pub async fn restore_session(&self) -> AuthState {
        let _op = self.op_lock.lock().await;

        let loaded = tokio::time::timeout(self.settings.restore_timeout(), self.sessions.load()).await;
        let resolved = match loaded {
            Ok(Ok(StoredSession::Valid(_))) => AuthState::Authenticated,
            Ok(Ok(StoredSession::Absent)) => AuthState::Unauthenticated,
            Ok(Ok(StoredSession::Malformed)) => {
                tracing::warn!("Stored session is malformed; discarding it");
                if let Err(e) = self.sessions.clear().await {
                    tracing::warn!(error = %e, "Failed to discard malformed session");
                }
                AuthState::Unauthenticated
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                AuthState::Unauthenticated
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.settings.restore_timeout_ms,
                    "Timed out reading stored session"
                );
                AuthState::Unauthenticated
            }
        };

        tracing::info!(state = %resolved, "Session restored");
        self.set_state(resolved);
        resolved
    }

    /// Validate `identifier` against the known record and sign in.
    pub async fn login(&self, identifier: &str) -> Result<(), AuthError> {
        {
            let mut inner = self.lock();
            if inner.login_in_flight || inner.state.is_resolving() {
                tracing::debug!("Rejecting login: another auth operation is pending");
                return Err(AuthError::AlreadyInProgress);
            }
            inner.login_in_flight = true;
            inner.fallback = inner.state;
            inner.state = AuthState::Authenticating;
        }
        self.events
            .emit(AppEvent::auth_state_changed(AuthState::Authenticating));

        let result = {
            let _op = self.op_lock.lock().await;
            self.attempt(identifier).await
        };

        let next = {
            let mut inner = self.lock();
            inner.login_in_flight = false;
            inner.state = match result {
                Ok(()) => AuthState::Authenticated,
                Err(_) => inner.fallback,
            };
            inner.state
        };

        match &result {
            Ok(()) => tracing::info!("Login succeeded"),
            Err(e) => tracing::info!(error = %e, "Login failed"),
        }
        self.events.emit(AppEvent::auth_state_changed(next));
        result
    }

    async fn attempt(&self, identifier: &str) -> Result<(), AuthError> {
        let latency = self.settings.login_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let credential = Credential::new(identifier);
        if credential.is_empty() || credential.len() < self.settings.min_identifier_len {
            return Err(AuthError::InvalidFormat);
        }
        if credential.as_str() != self.settings.known_identifier.trim() {
            return Err(AuthError::InvalidCredentials);
        }

        self.sessions
            .persist(&credential)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))
    }

    /// Sign out. Never fails; storage errors are logged.
    pub async fn logout(&self) {
        let _op = self.op_lock.lock().await;

        if let Err(e) = self.sessions.clear().await {
            tracing::warn!(error = %e, "Failed to clear stored session during logout");
        }

        {
            let mut inner = self.lock();
            inner.fallback = AuthState::Unauthenticated;
        }
        tracing::info!("Logged out");
        self.set_state(AuthState::Unauthenticated);
    }

    fn set_state(&self, state: AuthState) {
        self.lock().state = state;
        self.events.emit(AppEvent::auth_state_changed(state));
    }

    fn lock(&self) -> MutexGuard<'_, AuthInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{InMemoryKeyValueStore, NoopEmitter};
    use crate::services::session_store::SESSION_KEY;

    fn controller(store: Arc<InMemoryKeyValueStore>) -> AuthController {
        AuthController::new(store, Settings::immediate(), Arc::new(NoopEmitter::new()))
    }

    #[tokio::test]
    async fn starts_unresolved() {
        let auth = controller(Arc::new(InMemoryKeyValueStore::new()));
        assert_eq!(auth.state(), AuthState::Authenticating);
        assert!(!auth.session().authenticated);
    }

    #[tokio::test]
    async fn login_before_restore_is_rejected() {
        let auth = controller(Arc::new(InMemoryKeyValueStore::new()));
        assert_eq!(auth.login("+1234567890").await, Err(AuthError::AlreadyInProgress));
    }

    #[tokio::test]
    async fn short_identifier_is_invalid_format() {
        let auth = controller(Arc::new(InMemoryKeyValueStore::new()));
        auth.restore_session().await;

        for identifier in ["", "   ", "+12345", "123456789"] {
            assert_eq!(auth.login(identifier).await, Err(AuthError::InvalidFormat));
            assert_eq!(auth.state(), AuthState::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn known_identifier_signs_in_and_persists() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let auth = controller(store.clone());
        auth.restore_session().await;

        auth.login("+1234567890").await.unwrap();

        assert_eq!(auth.state(), AuthState::Authenticated);
        assert!(store.snapshot(SESSION_KEY).is_some());
    }

    #[tokio::test]
    async fn unknown_identifier_is_invalid_credentials() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let auth = controller(store.clone());
        auth.restore_session().await;

        assert_eq!(
            auth.login("+0000000000").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(auth.state(), AuthState::Unauthenticated);
        assert!(store.snapshot(SESSION_KEY).is_none());
    }

    #[tokio::test]
    async fn logout_clears_and_restore_stays_signed_out() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let auth = controller(store.clone());
        auth.restore_session().await;
        auth.login("+1234567890").await.unwrap();

        auth.logout().await;
        assert_eq!(auth.state(), AuthState::Unauthenticated);

        let fresh = controller(store);
        assert_eq!(fresh.restore_session().await, AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn failed_relogin_keeps_existing_session() {
        let auth = controller(Arc::new(InMemoryKeyValueStore::new()));
        auth.restore_session().await;
        auth.login("+1234567890").await.unwrap();

        assert!(auth.login("+0000000000").await.is_err());
        assert_eq!(auth.state(), AuthState::Authenticated);
    }

    #[test]
    fn errors_map_to_catalog_keys() {
        assert_eq!(AuthError::InvalidFormat.message_key(), "auth.errors.invalidFormat");
        assert_eq!(
            AuthError::Storage("disk".into()).message_key(),
            "auth.errors.storage"
        );
    }
}
