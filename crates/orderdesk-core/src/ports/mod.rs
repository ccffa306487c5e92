//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from the platform:
//! storage, speech synthesis, navigation, device locale, order data.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Adapters that are pure in-memory (router, fixtures) live next to their port

pub mod device_locale;
pub mod event_emitter;
pub mod key_value_store;
pub mod order_repository;
pub mod router;
pub mod speech_engine;

use std::sync::Arc;
use thiserror::Error;

pub use device_locale::{DeviceLocale, FixedDeviceLocale};
pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore};
pub use order_repository::{FixtureOrderRepository, OrderRepository};
pub use router::{MemoryRouter, Router};
pub use speech_engine::{
    SpeechEngine, SpeechEngineError, SpeechRequest, UtteranceCallbacks, UtteranceSignal, Voice,
};

/// Container for the platform adapters the core is wired against.
///
/// Built once by each entry point's composition root and handed to
/// `AppCore::new`.
#[derive(Clone)]
pub struct Ports {
    /// Persistent key-value storage (session token, language preference).
    pub store: Arc<dyn KeyValueStore>,
    /// Text-to-speech engine.
    pub speech: Arc<dyn SpeechEngine>,
    /// Device locale source.
    pub device_locale: Arc<dyn DeviceLocale>,
    /// Client and order data.
    pub orders: Arc<dyn OrderRepository>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        speech: Arc<dyn SpeechEngine>,
        device_locale: Arc<dyn DeviceLocale>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            store,
            speech,
            device_locale,
            orders,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes,
/// displayable messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Login failed.
    #[error(transparent)]
    Auth(#[from] crate::services::AuthError),

    /// Locale selection failed.
    #[error(transparent)]
    Locale(#[from] crate::services::LocaleError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
