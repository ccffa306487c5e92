//! Supported locales and per-locale voice parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::LocaleError;

/// A supported application locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// French.
    Fr,
    /// Portuguese.
    Pt,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Pt];

    /// Two-letter language code used for persistence and selection.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Pt => "pt",
        }
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
            Self::Pt => "Portuguese",
        }
    }

    /// Name of the language in the language itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Pt => "Português",
        }
    }

    /// BCP-47 tag handed to the speech engine.
    pub const fn tts_language(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Fr => "fr-FR",
            Self::Pt => "pt-BR",
        }
    }

    /// Voice parameters used when speaking in this locale.
    pub const fn voice_params(self) -> VoiceParams {
        match self {
            Self::En => VoiceParams::new(1.0, 1.0),
            Self::Fr => VoiceParams::new(1.1, 0.9),
            Self::Pt => VoiceParams::new(1.0, 0.95),
        }
    }

    /// Look up a locale from a language code, ignoring case.
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// Extract the language part of a device locale tag and look it up.
    ///
    /// Accepts POSIX (`fr_FR.UTF-8`) and BCP-47 (`pt-BR`) shaped tags.
    pub fn from_device_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default();
        Self::from_code(language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LocaleError::UnsupportedLocale(s.trim().to_string()))
    }
}

/// Pitch and rate multipliers for a spoken utterance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceParams {
    /// Pitch multiplier (1.0 = engine default).
    pub pitch: f32,
    /// Speaking rate multiplier (1.0 = engine default).
    pub rate: f32,
}

impl VoiceParams {
    pub const fn new(pitch: f32, rate: f32) -> Self {
        Self { pitch, rate }
    }
}

impl Default for VoiceParams {
    fn default() -> Self {
        Locale::En.voice_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes_case_insensitively() {
        assert_eq!(Locale::from_code("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_code(" PT "), Some(Locale::Pt));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn device_tags_reduce_to_language() {
        assert_eq!(Locale::from_device_tag("fr_FR.UTF-8"), Some(Locale::Fr));
        assert_eq!(Locale::from_device_tag("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_device_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_device_tag("de_DE.UTF-8"), None);
        assert_eq!(Locale::from_device_tag("C"), None);
    }

    #[test]
    fn voice_table_matches_locales() {
        assert_eq!(Locale::En.voice_params(), VoiceParams::new(1.0, 1.0));
        assert_eq!(Locale::Fr.voice_params(), VoiceParams::new(1.1, 0.9));
        assert_eq!(Locale::Pt.voice_params(), VoiceParams::new(1.0, 0.95));
    }

    #[test]
    fn from_str_reports_unsupported_code() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, LocaleError::UnsupportedLocale(ref code) if code == "de"));
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Pt).unwrap(), "\"pt\"");
    }
}
