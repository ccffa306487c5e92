//! Language resolver - determines and persists the active locale.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

use crate::domain::Locale;
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, DeviceLocale, KeyValueStore};

/// Storage key of the persisted language preference.
pub const LANGUAGE_KEY: &str = "app_language";

/// Errors from locale selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Resolves the active locale: persisted preference, then device, then English.
pub struct LanguageResolver {
    store: Arc<dyn KeyValueStore>,
    device: Arc<dyn DeviceLocale>,
    current: Mutex<Option<Locale>>,
    write_lock: AsyncMutex<()>,
    events: Arc<dyn AppEventEmitter>,
}

impl LanguageResolver {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        device: Arc<dyn DeviceLocale>,
        events: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            store,
            device,
            current: Mutex::new(None),
            write_lock: AsyncMutex::new(()),
            events,
        }
    }

    /// Resolve the locale once and cache it.
    ///
    /// A persisted but unsupported value resolves to English rather than
    /// falling through to the device default.
    pub async fn resolve(&self) -> Locale {
        if let Some(locale) = self.cached() {
            return locale;
        }

        let persisted = match self.store.get(LANGUAGE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read language preference");
                None
            }
        };

        let resolved = match persisted {
            Some(code) => Locale::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(code = %code, "Persisted language is not supported");
                Locale::En
            }),
            None => self.device_default(),
        };

        // A `select` that finished while we were reading wins.
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let locale = *current.get_or_insert(resolved);
        drop(current);

        tracing::debug!(locale = %locale, "Resolved locale");
        locale
    }

    fn device_default(&self) -> Locale {
        self.device
            .language_tag()
            .and_then(|tag| Locale::from_device_tag(&tag))
            .unwrap_or_default()
    }

    /// Switch to `code`, persist it, and notify listeners.
    ///
    /// Persistence failures are logged; the in-memory switch still happens.
    pub async fn select(&self, code: &str) -> Result<Locale, LocaleError> {
        let locale =
            Locale::from_code(code).ok_or_else(|| LocaleError::UnsupportedLocale(code.to_string()))?;

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(locale);

        {
            let _guard = self.write_lock.lock().await;
            if let Err(e) = self.store.set(LANGUAGE_KEY, locale.code()).await {
                tracing::warn!(error = %e, locale = %locale, "Failed to persist language preference");
            }
        }

        tracing::info!(locale = %locale, "Language changed");
        self.events.emit(AppEvent::locale_changed(locale));
        Ok(locale)
    }

    /// The active locale, or English before the first `resolve`.
    pub fn current(&self) -> Locale {
        self.cached().unwrap_or_default()
    }

    pub const fn supported(&self) -> &'static [Locale] {
        &Locale::ALL
    }

    fn cached(&self) -> Option<Locale> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
