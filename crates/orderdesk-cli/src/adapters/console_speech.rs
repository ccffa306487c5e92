//! Speech engine that "speaks" by printing to the terminal.
//!
//! Completion is reported after a delay proportional to the word count and
//! the requested rate, so the core sees the same asynchronous lifecycle it
//! would get from a real synthesizer.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use orderdesk_core::{
    Locale, SpeechEngine, SpeechEngineError, SpeechRequest, UtteranceCallbacks, Voice,
};

/// Time per word at rate 1.0 (about 150 words per minute).
pub const DEFAULT_WORD_PACE: Duration = Duration::from_millis(400);

type Active = Arc<Mutex<Option<(u64, UtteranceCallbacks)>>>;

/// Prints utterances to stdout.
pub struct ConsoleSpeechEngine {
    word_pace: Duration,
    next_id: AtomicU64,
    active: Active,
}

impl ConsoleSpeechEngine {
    pub fn new(word_pace: Duration) -> Self {
        Self {
            word_pace,
            next_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// How long `request` takes to "say".
    pub fn duration_of(&self, request: &SpeechRequest) -> Duration {
        let words = request.text.split_whitespace().count() as f64;
        let rate = if request.rate > 0.0 {
            f64::from(request.rate)
        } else {
            1.0
        };
        let nanos = self.word_pace.as_nanos() as f64 * words / rate;
        Duration::from_nanos(nanos.round() as u64)
    }

    fn take_if(active: &Active, id: u64) -> Option<UtteranceCallbacks> {
        let mut slot = active.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some((current, _)) if *current == id => slot.take().map(|(_, callbacks)| callbacks),
            _ => None,
        }
    }
}

impl Default for ConsoleSpeechEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_PACE)
    }
}

#[async_trait]
impl SpeechEngine for ConsoleSpeechEngine {
    async fn speak(
        &self,
        request: SpeechRequest,
        callbacks: UtteranceCallbacks,
    ) -> Result<(), SpeechEngineError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "🔊 [{}] {}", request.language, request.text)
            .map_err(|e| SpeechEngineError::Engine(e.to_string()))?;
        drop(out);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let previous = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace((id, callbacks.clone()));
        if let Some((_, interrupted)) = previous {
            interrupted.on_stopped();
        }
        callbacks.on_start();

        let duration = self.duration_of(&request);
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(callbacks) = Self::take_if(&active, id) {
                callbacks.on_done();
            }
        });

        tracing::debug!(utterance = id, ?duration, "Console utterance scheduled");
        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechEngineError> {
        let stopped = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some((id, callbacks)) = stopped {
            tracing::debug!(utterance = id, "Console utterance stopped");
            callbacks.on_stopped();
        }
        Ok(())
    }

    /// One terminal voice per supported locale.
    async fn voices(&self) -> Result<Vec<Voice>, SpeechEngineError> {
        Ok(Locale::ALL
            .into_iter()
            .map(|locale| Voice {
                identifier: format!("console-{}", locale.tts_language()),
                name: format!("Console {}", locale.native_name()),
                language: locale.tts_language().to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::UtteranceSignal;

    fn request(text: &str, rate: f32) -> SpeechRequest {
        SpeechRequest {
            text: text.to_string(),
            language: "en-US".to_string(),
            pitch: 1.0,
            rate,
        }
    }

    fn recorder() -> (UtteranceCallbacks, Arc<Mutex<Vec<UtteranceSignal>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callbacks = UtteranceCallbacks::new(move |s| sink.lock().unwrap().push(s));
        (callbacks, seen)
    }

    #[test]
    fn test_duration_scales_with_words_and_rate() {
        let engine = ConsoleSpeechEngine::new(Duration::from_millis(100));
        assert_eq!(engine.duration_of(&request("one two three", 1.0)), Duration::from_millis(300));
        assert_eq!(engine.duration_of(&request("one two", 0.5)), Duration::from_millis(400));
        assert_eq!(engine.duration_of(&request("", 1.0)), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_done_after_duration() {
        let engine = ConsoleSpeechEngine::new(Duration::from_millis(100));
        let (callbacks, seen) = recorder();

        engine.speak(request("hello there", 1.0), callbacks).await.unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![UtteranceSignal::Started, UtteranceSignal::Done]
        );
    }

    #[tokio::test]
    async fn test_offers_a_voice_per_locale() {
        let voices = ConsoleSpeechEngine::default().voices().await.unwrap();
        let languages: Vec<&str> = voices.iter().map(|v| v.language.as_str()).collect();
        assert_eq!(languages, vec!["en-US", "fr-FR", "pt-BR"]);
        assert_eq!(voices[1].identifier, "console-fr-FR");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_reports_stopped_and_suppresses_done() {
        let engine = ConsoleSpeechEngine::new(Duration::from_millis(100));
        let (callbacks, seen) = recorder();

        engine.speak(request("hello there", 1.0), callbacks).await.unwrap();
        engine.stop().await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![UtteranceSignal::Started, UtteranceSignal::Stopped]
        );
    }
}
