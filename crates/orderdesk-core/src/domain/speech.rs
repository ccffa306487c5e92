//! Speech session types.

use serde::{Deserialize, Serialize};

use super::locale::{Locale, VoiceParams};

/// Whether the speech controller currently owns an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechState {
    #[default]
    Idle,
    Speaking,
}

/// Identity of one utterance.
///
/// Minted by the speech controller for every `speak` call. Engine callbacks
/// carry the lease they were issued with; a callback whose lease is no longer
/// current is stale and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtteranceLease(pub u64);

/// The utterance currently owned by the speech controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSession {
    pub lease: UtteranceLease,
    pub utterance_text: String,
    pub locale: Locale,
    pub voice_params: VoiceParams,
    pub state: SpeechState,
}
