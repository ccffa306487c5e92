//! Integration tests for the speech controller's lease handling.
//!
//! A recording engine keeps the callbacks of every request so tests can
//! deliver completions out of order; a `mockall` engine covers failures.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use orderdesk_core::{
    AppEvent, AppEventEmitter, EventBus, FixedDeviceLocale, InMemoryKeyValueStore,
    LanguageResolver, Locale, SpeechController, SpeechEngine, SpeechEngineError, SpeechRequest,
    SpeechState, UtteranceCallbacks, Voice,
};
use tokio::sync::Notify;

// ── Engines ────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingEngine {
    requests: Mutex<Vec<(SpeechRequest, UtteranceCallbacks)>>,
    stops: Mutex<usize>,
}

impl RecordingEngine {
    fn request(&self, index: usize) -> SpeechRequest {
        self.requests.lock().unwrap()[index].0.clone()
    }

    fn callbacks(&self, index: usize) -> UtteranceCallbacks {
        self.requests.lock().unwrap()[index].1.clone()
    }

    fn stop_count(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

#[async_trait]
impl SpeechEngine for RecordingEngine {
    async fn speak(
        &self,
        request: SpeechRequest,
        callbacks: UtteranceCallbacks,
    ) -> Result<(), SpeechEngineError> {
        callbacks.on_start();
        self.requests.lock().unwrap().push((request, callbacks));
        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechEngineError> {
        *self.stops.lock().unwrap() += 1;
        Ok(())
    }
}

/// Engine whose `speak` blocks until the test opens the gate.
#[derive(Default)]
struct GatedEngine {
    entered: Notify,
    gate: Notify,
    accepted: Mutex<Vec<UtteranceCallbacks>>,
    stops: Mutex<usize>,
}

#[async_trait]
impl SpeechEngine for GatedEngine {
    async fn speak(
        &self,
        _request: SpeechRequest,
        callbacks: UtteranceCallbacks,
    ) -> Result<(), SpeechEngineError> {
        self.entered.notify_one();
        self.gate.notified().await;
        callbacks.on_start();
        self.accepted.lock().unwrap().push(callbacks);
        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechEngineError> {
        *self.stops.lock().unwrap() += 1;
        Ok(())
    }
}

mock! {
    Engine {}

    #[async_trait]
    impl SpeechEngine for Engine {
        async fn speak(
            &self,
            request: SpeechRequest,
            callbacks: UtteranceCallbacks,
        ) -> Result<(), SpeechEngineError>;

        async fn stop(&self) -> Result<(), SpeechEngineError>;

        async fn voices(&self) -> Result<Vec<Voice>, SpeechEngineError>;
    }
}

// ── Helpers ────────────────────────────────────────────────────────

struct Harness {
    speech: SpeechController,
    languages: Arc<LanguageResolver>,
    states: Arc<Mutex<Vec<SpeechState>>>,
}

fn harness(engine: Arc<dyn SpeechEngine>) -> Harness {
    let bus = EventBus::new();
    let states = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&states);
    bus.subscribe(move |event| {
        if let AppEvent::SpeechStateChanged { state, .. } = event {
            sink.lock().unwrap().push(*state);
        }
    });

    let events: Arc<dyn AppEventEmitter> = Arc::new(bus);
    let languages = Arc::new(LanguageResolver::new(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(FixedDeviceLocale::unavailable()),
        Arc::clone(&events),
    ));
    Harness {
        speech: SpeechController::new(engine, Arc::clone(&languages), events),
        languages,
        states,
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[tokio::test]
async fn last_caller_wins() {
    let engine = Arc::new(RecordingEngine::default());
    let h = harness(engine.clone());

    h.speech.speak("A", Locale::En).await.unwrap();
    h.speech.speak("B", Locale::En).await.unwrap();

    let current = h.speech.current().unwrap();
    assert_eq!(current.utterance_text, "B");
    assert_eq!(current.state, SpeechState::Speaking);
    assert_eq!(engine.stop_count(), 1);

    // Late completion of "A" must not end "B".
    engine.callbacks(0).on_done();
    engine.callbacks(0).on_stopped();
    assert!(h.speech.is_speaking());

    engine.callbacks(1).on_done();
    assert!(!h.speech.is_speaking());
    assert_eq!(
        *h.states.lock().unwrap(),
        vec![SpeechState::Speaking, SpeechState::Speaking, SpeechState::Idle]
    );
}

#[tokio::test]
async fn stop_while_idle_is_a_no_op() {
    let engine = Arc::new(RecordingEngine::default());
    let h = harness(engine.clone());

    h.speech.stop().await;

    assert_eq!(engine.stop_count(), 0);
    assert!(h.states.lock().unwrap().is_empty());
    assert_eq!(h.speech.state(), SpeechState::Idle);
}

#[tokio::test]
async fn stop_releases_the_lease() {
    let engine = Arc::new(RecordingEngine::default());
    let h = harness(engine.clone());

    h.speech.speak("Hello", Locale::En).await.unwrap();
    h.speech.stop().await;
    assert!(!h.speech.is_speaking());

    // The engine reports the stop afterwards; it must not emit a second Idle.
    engine.callbacks(0).on_stopped();
    assert_eq!(
        *h.states.lock().unwrap(),
        vec![SpeechState::Speaking, SpeechState::Idle]
    );
}

#[tokio::test]
async fn selected_locale_drives_voice() {
    let engine = Arc::new(RecordingEngine::default());
    let h = harness(engine.clone());

    h.languages.select("fr").await.unwrap();
    h.speech.speak_current("Bonjour").await.unwrap();

    let request = engine.request(0);
    assert_eq!(request.language, "fr-FR");
    assert!((request.pitch - 1.1).abs() < f32::EPSILON);
    assert!((request.rate - 0.9).abs() < f32::EPSILON);
}

#[tokio::test]
async fn engine_failure_fails_open() {
    let mut engine = MockEngine::new();
    engine
        .expect_speak()
        .times(1)
        .returning(|_, _| Err(SpeechEngineError::Engine("no voice".to_string())));
    engine.expect_stop().never();
    let h = harness(Arc::new(engine));

    assert!(h.speech.speak("Hello", Locale::Pt).await.is_some());

    assert_eq!(h.speech.state(), SpeechState::Idle);
    assert_eq!(
        *h.states.lock().unwrap(),
        vec![SpeechState::Speaking, SpeechState::Idle]
    );
}

#[tokio::test]
async fn stale_error_does_not_end_current_utterance() {
    let engine = Arc::new(RecordingEngine::default());
    let h = harness(engine.clone());

    h.speech.speak("A", Locale::En).await.unwrap();
    h.speech.speak("B", Locale::En).await.unwrap();

    engine.callbacks(0).on_error("interrupted");
    assert!(h.speech.is_speaking());

    engine.callbacks(1).on_error("device lost");
    assert!(!h.speech.is_speaking());
}

#[tokio::test]
async fn stop_failure_is_swallowed() {
    let mut engine = MockEngine::new();
    engine.expect_speak().returning(|_, _| Ok(()));
    engine
        .expect_stop()
        .times(1)
        .returning(|| Err(SpeechEngineError::Engine("busy".to_string())));
    let h = harness(Arc::new(engine));

    h.speech.speak("Hello", Locale::En).await.unwrap();
    h.speech.stop().await;

    assert!(!h.speech.is_speaking());
}

#[tokio::test]
async fn stop_during_engine_accept_wins() {
    let engine = Arc::new(GatedEngine::default());
    let h = harness(engine.clone());

    let speaking = h.speech.speak("A", Locale::En);
    let stopping = async {
        engine.entered.notified().await;
        h.speech.stop().await;
        engine.gate.notify_one();
    };
    let (lease, ()) = tokio::join!(speaking, stopping);

    assert_eq!(lease, None);
    assert!(!h.speech.is_speaking());
    assert_eq!(engine.accepted.lock().unwrap().len(), 1);
    // One stop from stop() itself, one once the engine held the utterance.
    assert_eq!(*engine.stops.lock().unwrap(), 2);
    assert_eq!(
        *h.states.lock().unwrap(),
        vec![SpeechState::Speaking, SpeechState::Idle]
    );
}

#[tokio::test]
async fn voices_come_from_the_engine() {
    let mut engine = MockEngine::new();
    engine.expect_voices().times(1).returning(|| {
        Ok(vec![Voice {
            identifier: "fr-voice".to_string(),
            name: "Amélie".to_string(),
            language: "fr-FR".to_string(),
        }])
    });
    let h = harness(Arc::new(engine));

    let voices = h.speech.voices().await;
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].language, "fr-FR");
}

#[tokio::test]
async fn voice_listing_failure_yields_none() {
    let mut engine = MockEngine::new();
    engine
        .expect_voices()
        .returning(|| Err(SpeechEngineError::Engine("unavailable".to_string())));
    let h = harness(Arc::new(engine));

    assert!(h.speech.voices().await.is_empty());
}
