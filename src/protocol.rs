//! Webhook request and response bodies.
//!
//! The voice-assistant platform posts one [`SkillRequest`] per utterance and
//! expects one [`SkillResponse`] back. Both sides are lenient about missing
//! fields: anything absent or `null` in a request reads as empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Session fields copied from the request into the response.
pub const ECHOED_SESSION_KEYS: [&str; 3] = ["session_id", "message_id", "user_id"];

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An incoming webhook call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRequest {
    /// What the user said.
    #[serde(default, deserialize_with = "nullable")]
    pub request: UserRequest,
    /// Session identifiers.
    #[serde(default, deserialize_with = "nullable")]
    pub session: Map<String, Value>,
    /// State the platform stored for this skill.
    #[serde(default, deserialize_with = "nullable")]
    pub state: StoredState,
    /// Protocol version, echoed back untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

/// The user's utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    /// Raw utterance text.
    #[serde(default, deserialize_with = "nullable")]
    pub original_utterance: String,
}

/// State stored by the platform between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredState {
    /// Session-scoped state, returned as `session_state` in the response.
    #[serde(default, deserialize_with = "nullable")]
    pub session: Map<String, Value>,
}

/// The reply for one webhook call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    /// What to show and say.
    pub response: Reply,
    /// Echoed session identifiers.
    pub session: Map<String, Value>,
    /// Session state to hand back on the next call.
    pub session_state: Map<String, Value>,
    /// Echoed protocol version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

/// Text for display and speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Display text.
    pub text: String,
    /// Text-to-speech text.
    pub tts: String,
    /// Whether the platform should close the session.
    pub end_session: bool,
}

impl Reply {
    /// Creates a reply that shows and speaks the same text, keeping the
    /// session open.
    #[must_use]
    pub fn say(text: String) -> Self {
        Self {
            tts: text.clone(),
            text,
            end_session: false,
        }
    }
}

/// Copies the echoed session keys, plus `extra`, from a request session.
///
/// Keys missing from the request are left out.
#[must_use]
pub fn echo_session(session: &Map<String, Value>, extra: &str) -> Map<String, Value> {
    ECHOED_SESSION_KEYS
        .iter()
        .copied()
        .chain(core::iter::once(extra))
        .filter_map(|key| {
            session
                .get(key)
                .map(|value| (key.to_owned(), value.clone()))
        })
        .collect()
}
