//! Terminal adapters for the core's platform ports.

mod console_speech;
mod env_locale;

pub use console_speech::{ConsoleSpeechEngine, DEFAULT_WORD_PACE};
pub use env_locale::EnvDeviceLocale;
