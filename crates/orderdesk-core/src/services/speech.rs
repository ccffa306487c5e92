//! Speech controller - owns the single active utterance.
//!
//! Every `speak` mints a new [`UtteranceLease`] from a monotonically
//! increasing counter. Engine callbacks are bound to the lease they were
//! issued with and only act while that lease is the current one, so a late
//! `on_done` from a superseded utterance can never flip the state of the
//! utterance that replaced it.
//!
//! The controller speaks one utterance at a time: last caller wins, nothing
//! is queued.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::domain::{Locale, SpeechSession, SpeechState, UtteranceLease};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, SpeechEngine, SpeechRequest, UtteranceCallbacks, UtteranceSignal, Voice,
};

use super::language::LanguageResolver;

#[derive(Debug, Default)]
struct SpeechInner {
    lease_counter: u64,
    /// Last utterance handed to the engine; `Speaking` while it owns the lease.
    session: Option<SpeechSession>,
    /// Lease most recently released by `stop()`.
    stopped: Option<UtteranceLease>,
}

/// Where an utterance stands once the engine accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accepted {
    /// Still the active utterance, or it already completed on its own.
    Live,
    /// `stop()` released it while the engine was taking it.
    Stopped,
    /// A newer `speak` took over.
    Superseded,
}

/// State shared with engine callbacks.
struct Shared {
    inner: Mutex<SpeechInner>,
    events: Arc<dyn AppEventEmitter>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SpeechInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, lease: UtteranceLease) -> bool {
        self.lock()
            .session
            .as_ref()
            .is_some_and(|s| s.lease == lease && s.state == SpeechState::Speaking)
    }

    fn accepted(&self, lease: UtteranceLease) -> Accepted {
        let inner = self.lock();
        match inner.session.as_ref() {
            Some(s) if s.lease != lease => Accepted::Superseded,
            _ if inner.stopped == Some(lease) => Accepted::Stopped,
            _ => Accepted::Live,
        }
    }

    /// Move the utterance owning `lease` to Idle. No-op for stale leases.
    fn finish(&self, lease: UtteranceLease) -> bool {
        let finished = {
            let mut inner = self.lock();
            match inner.session.as_mut() {
                Some(s) if s.lease == lease && s.state == SpeechState::Speaking => {
                    s.state = SpeechState::Idle;
                    true
                }
                _ => false,
            }
        };
        if finished {
            self.events.emit(AppEvent::speech_finished(lease));
        }
        finished
    }

    fn on_signal(&self, lease: UtteranceLease, signal: UtteranceSignal) {
        match signal {
            UtteranceSignal::Started => {
                if self.is_current(lease) {
                    tracing::debug!(lease = lease.0, "Utterance started");
                } else {
                    tracing::debug!(lease = lease.0, "Ignoring start of stale utterance");
                }
            }
            UtteranceSignal::Done | UtteranceSignal::Stopped => {
                if !self.finish(lease) {
                    tracing::debug!(lease = lease.0, ?signal, "Ignoring stale utterance callback");
                }
            }
            UtteranceSignal::Error(message) => {
                if self.finish(lease) {
                    tracing::warn!(lease = lease.0, error = %message, "Speech engine reported an error");
                } else {
                    tracing::debug!(lease = lease.0, error = %message, "Ignoring stale utterance error");
                }
            }
        }
    }
}

/// Coordinates speech output against the platform engine.
pub struct SpeechController {
    engine: Arc<dyn SpeechEngine>,
    languages: Arc<LanguageResolver>,
    shared: Arc<Shared>,
}

impl SpeechController {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        languages: Arc<LanguageResolver>,
        events: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            engine,
            languages,
            shared: Arc::new(Shared {
                inner: Mutex::new(SpeechInner::default()),
                events,
            }),
        }
    }

    /// Speak `text` with `locale`'s voice, superseding anything in progress.
    ///
    /// Returns the lease of the new utterance, or `None` when `text` is blank
    /// or a newer `speak` or a `stop()` took over before the engine accepted
    /// the request. Engine failures are logged and leave the controller Idle.
    pub async fn speak(&self, text: &str, locale: Locale) -> Option<UtteranceLease> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("Ignoring empty utterance");
            return None;
        }

        let voice = locale.voice_params();
        let (lease, superseded) = {
            let mut inner = self.shared.lock();
            inner.lease_counter += 1;
            let lease = UtteranceLease(inner.lease_counter);
            let superseded = inner
                .session
                .as_ref()
                .filter(|s| s.state == SpeechState::Speaking)
                .map(|s| s.lease);
            inner.session = Some(SpeechSession {
                lease,
                utterance_text: text.to_string(),
                locale,
                voice_params: voice,
                state: SpeechState::Speaking,
            });
            (lease, superseded)
        };
        self.shared.events.emit(AppEvent::speech_started(lease));

        if let Some(previous) = superseded {
            tracing::debug!(previous = previous.0, lease = lease.0, "Superseding utterance");
            if let Err(e) = self.engine.stop().await {
                tracing::warn!(error = %e, "Failed to stop superseded utterance");
            }
            if !self.shared.is_current(lease) {
                tracing::debug!(lease = lease.0, "Utterance superseded before it started");
                return None;
            }
        }

        let request = SpeechRequest {
            text: text.to_string(),
            language: locale.tts_language().to_string(),
            pitch: voice.pitch,
            rate: voice.rate,
        };
        let callbacks = self.callbacks_for(lease);

        tracing::info!(lease = lease.0, locale = %locale, "Speaking");
        if let Err(e) = self.engine.speak(request, callbacks).await {
            tracing::warn!(lease = lease.0, error = %e, "Speech engine failed; returning to idle");
            self.shared.finish(lease);
            return Some(lease);
        }

        // The engine may have taken the request after a concurrent stop()
        // already ran against it.
        match self.shared.accepted(lease) {
            Accepted::Live => Some(lease),
            Accepted::Superseded => {
                tracing::debug!(lease = lease.0, "Utterance superseded while engine accepted it");
                None
            }
            Accepted::Stopped => {
                tracing::debug!(lease = lease.0, "Utterance stopped while engine accepted it");
                if let Err(e) = self.engine.stop().await {
                    tracing::warn!(error = %e, "Failed to stop speech engine");
                }
                None
            }
        }
    }

    /// Speak in the resolved application locale.
    pub async fn speak_current(&self, text: &str) -> Option<UtteranceLease> {
        let locale = self.languages.resolve().await;
        self.speak(text, locale).await
    }

    /// Stop the active utterance. No-op when Idle.
    pub async fn stop(&self) {
        let released = {
            let mut inner = self.shared.lock();
            let released = match inner.session.as_mut() {
                Some(s) if s.state == SpeechState::Speaking => {
                    s.state = SpeechState::Idle;
                    Some(s.lease)
                }
                _ => None,
            };
            if released.is_some() {
                inner.stopped = released;
            }
            released
        };
        let Some(lease) = released else {
            return;
        };

        tracing::info!(lease = lease.0, "Stopping speech");
        self.shared.events.emit(AppEvent::speech_finished(lease));
        if let Err(e) = self.engine.stop().await {
            tracing::warn!(error = %e, "Failed to stop speech engine");
        }
    }

    /// Voices the engine offers. Empty when the engine cannot list them.
    pub async fn voices(&self) -> Vec<Voice> {
        match self.engine.voices().await {
            Ok(voices) => voices,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list speech voices");
                Vec::new()
            }
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.state() == SpeechState::Speaking
    }

    pub fn state(&self) -> SpeechState {
        self.shared
            .lock()
            .session
            .as_ref()
            .map_or(SpeechState::Idle, |s| s.state)
    }

    /// Snapshot of the last utterance, if any.
    pub fn current(&self) -> Option<SpeechSession> {
        self.shared.lock().session.clone()
    }

    fn callbacks_for(&self, lease: UtteranceLease) -> UtteranceCallbacks {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        UtteranceCallbacks::new(move |signal| {
            if let Some(shared) = shared.upgrade() {
                shared.on_signal(lease, signal);
            }
        })
    }
}
