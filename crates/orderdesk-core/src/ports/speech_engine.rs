//! Speech engine port: the external text-to-speech synthesizer.
//!
//! The core never synthesizes audio itself. It hands a [`SpeechRequest`] to
//! the engine together with [`UtteranceCallbacks`], and the engine reports
//! progress through those callbacks, possibly long after `speak` returned.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the engine should say and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    /// BCP-47 language tag (e.g. `fr-FR`).
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
}

/// A voice the engine can speak with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Engine-specific voice identifier.
    pub identifier: String,
    pub name: String,
    /// BCP-47 language tag.
    pub language: String,
}

/// Progress reported by the engine for one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtteranceSignal {
    Started,
    Done,
    Stopped,
    Error(String),
}

/// Callback handle passed to the engine with every request.
///
/// Cheap to clone; engines may move clones into background tasks. Calling
/// any method after the utterance was superseded is harmless.
#[derive(Clone)]
pub struct UtteranceCallbacks {
    sink: Arc<dyn Fn(UtteranceSignal) + Send + Sync>,
}

impl UtteranceCallbacks {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(UtteranceSignal) + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Callbacks that ignore every signal.
    pub fn detached() -> Self {
        Self::new(|_| {})
    }

    pub fn on_start(&self) {
        (self.sink)(UtteranceSignal::Started);
    }

    pub fn on_done(&self) {
        (self.sink)(UtteranceSignal::Done);
    }

    pub fn on_stopped(&self) {
        (self.sink)(UtteranceSignal::Stopped);
    }

    pub fn on_error(&self, message: impl Into<String>) {
        (self.sink)(UtteranceSignal::Error(message.into()));
    }
}

impl fmt::Debug for UtteranceCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtteranceCallbacks").finish_non_exhaustive()
    }
}

/// Failures reported synchronously by the engine.
#[derive(Debug, Clone, Error)]
pub enum SpeechEngineError {
    /// The engine rejected or failed the request.
    #[error("Speech engine error: {0}")]
    Engine(String),
}

/// Port for the platform text-to-speech engine.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Begin speaking. Returns once the engine accepted the request;
    /// completion is reported through `callbacks`.
    async fn speak(
        &self,
        request: SpeechRequest,
        callbacks: UtteranceCallbacks,
    ) -> Result<(), SpeechEngineError>;

    /// Stop whatever is being spoken.
    async fn stop(&self) -> Result<(), SpeechEngineError>;

    /// Voices installed on the engine. Engines without voice selection report
    /// none.
    async fn voices(&self) -> Result<Vec<Voice>, SpeechEngineError> {
        Ok(Vec::new())
    }
}
