//! Core of orderdesk: authentication, route guarding, speech and locale
//! resolution for an order-tracking client, expressed as ports and services.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod i18n;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AuthState, Classification, Client, Credential, FIXTURE_CLIENT_PHONE, Locale, Order,
    OrderStatus, Product, Route, Session, SessionToken, SpeechSession, SpeechState,
    UnknownRoute, UtteranceLease, VoiceParams, fixture_client, fixture_orders,
};
pub use events::{AppEvent, EventBus, Listener, SubscriptionId};
pub use ports::{
    AppEventEmitter, CoreError, DeviceLocale, FixedDeviceLocale, FixtureOrderRepository,
    InMemoryKeyValueStore, KeyValueStore, MemoryRouter, NoopEmitter, OrderRepository, Ports,
    RepositoryError, Router, SpeechEngine, SpeechEngineError, SpeechRequest, UtteranceCallbacks,
    UtteranceSignal, Voice,
};
pub use services::{
    Announcer, AppCore, AuthController, AuthError, GuardDecision, LanguageResolver, LocaleError,
    OrderService, Page, RouteGuard, SpeechController,
};
pub use settings::{Settings, SettingsError, validate_settings};

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, DATABASE_FILE, PathError, data_root, database_path, database_path_in,
    ensure_directory,
};

// Only exercised by the integration suites
#[cfg(test)]
use mockall as _;
