//! On-disk persistence across restarts: a session and a language preference
//! written through one `AppCore` are visible to the next one.

use std::sync::Arc;

use async_trait::async_trait;
use orderdesk_core::{
    AppCore, AuthState, FixedDeviceLocale, FixtureOrderRepository, Locale, Ports, Route,
    Settings, SpeechEngine, SpeechEngineError, SpeechRequest, UtteranceCallbacks,
};
use orderdesk_db::{SqliteKeyValueStore, setup_database};

struct SilentEngine;

#[async_trait]
impl SpeechEngine for SilentEngine {
    async fn speak(
        &self,
        _request: SpeechRequest,
        callbacks: UtteranceCallbacks,
    ) -> Result<(), SpeechEngineError> {
        callbacks.on_done();
        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechEngineError> {
        Ok(())
    }
}

async fn boot(path: &std::path::Path) -> AppCore {
    let pool = setup_database(path).await.unwrap();
    let ports = Ports::new(
        Arc::new(SqliteKeyValueStore::new(pool)),
        Arc::new(SilentEngine),
        Arc::new(FixedDeviceLocale::new("en_US.UTF-8")),
        Arc::new(FixtureOrderRepository::new()),
    );
    let core = AppCore::new(ports, Settings::immediate()).unwrap();
    core.start().await;
    core
}

#[tokio::test]
async fn session_and_language_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orderdesk.db");

    let first = boot(&path).await;
    assert_eq!(first.location(), Route::Login);
    first.auth().login("+1234567890").await.unwrap();
    first.languages().select("pt").await.unwrap();
    drop(first);

    let second = boot(&path).await;
    assert_eq!(second.auth().state(), AuthState::Authenticated);
    assert_eq!(second.location(), Route::Dashboard);
    assert_eq!(second.locale(), Locale::Pt);

    second.auth().logout().await;
    drop(second);

    let third = boot(&path).await;
    assert_eq!(third.auth().state(), AuthState::Unauthenticated);
    assert_eq!(third.location(), Route::Login);
}
