//! Canonical event union for state changes observed by views and the route guard.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "locale_changed", "locale": "fr" }
//! ```

mod bus;

use serde::{Deserialize, Serialize};

use crate::domain::{AuthState, Locale, Route, SpeechState, UtteranceLease};

pub use bus::{EventBus, Listener, SubscriptionId};

/// State-change notifications emitted by core services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// The authentication state machine moved.
    AuthStateChanged {
        state: AuthState,
    },

    /// The router's current location changed.
    LocationChanged {
        route: Route,
    },

    /// The active locale changed (user selection).
    LocaleChanged {
        locale: Locale,
    },

    /// The speech controller started or finished an utterance.
    SpeechStateChanged {
        state: SpeechState,
        /// Lease of the utterance that caused the change.
        lease: UtteranceLease,
    },
}

impl AppEvent {
    pub const fn auth_state_changed(state: AuthState) -> Self {
        Self::AuthStateChanged { state }
    }

    pub const fn location_changed(route: Route) -> Self {
        Self::LocationChanged { route }
    }

    pub const fn locale_changed(locale: Locale) -> Self {
        Self::LocaleChanged { locale }
    }

    pub const fn speech_started(lease: UtteranceLease) -> Self {
        Self::SpeechStateChanged {
            state: SpeechState::Speaking,
            lease,
        }
    }

    pub const fn speech_finished(lease: UtteranceLease) -> Self {
        Self::SpeechStateChanged {
            state: SpeechState::Idle,
            lease,
        }
    }

    /// Short name used in log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AuthStateChanged { .. } => "auth_state_changed",
            Self::LocationChanged { .. } => "location_changed",
            Self::LocaleChanged { .. } => "locale_changed",
            Self::SpeechStateChanged { .. } => "speech_state_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(AppEvent::locale_changed(Locale::Fr)).unwrap();
        assert_eq!(json["type"], "locale_changed");
        assert_eq!(json["locale"], "fr");
    }

    #[test]
    fn speech_event_carries_lease() {
        let event = AppEvent::speech_started(UtteranceLease(7));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["state"], "speaking");
        assert_eq!(json["lease"], 7);
        assert_eq!(event.kind(), "speech_state_changed");
    }
}
