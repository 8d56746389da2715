//! Wire types for gateway telemetry.
//!
//! Two inputs reach the engine: streamed chat events (one per model turn
//! delta) and a periodically polled session snapshot list.  Both arrive as
//! JSON; the structs here mirror the gateway's camelCase payloads.
//!
//! Message `content` stays a raw [`serde_json::Value`]: the gateway sends
//! either a plain string or an array of heterogeneous content blocks, and
//! unknown block types must pass through harmlessly.  The manager walks the
//! value instead of forcing it into a closed enum.

use serde::Deserialize;
use serde_json::Value;

use crate::{SessionError, SessionResult};

// ── Chat events ───────────────────────────────────────────────────────────────

/// Lifecycle state of a chat event.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatState {
    /// Mid-run content delta.
    Delta,
    /// Run completed normally.
    Final,
    /// Run was cancelled.
    Aborted,
    /// Run failed.
    Error,
}

/// The message carried by a delta event.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatMessage {
    /// Either a string or an array of content blocks.
    #[serde(default)]
    pub content: Value,

    /// Model name, when the gateway includes it.
    #[serde(default)]
    pub model: Option<String>,
}

/// One chat telemetry event.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    pub session_key: String,
    pub state: ChatState,
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

impl ChatEvent {
    /// Parse an event from a raw gateway payload.
    pub fn from_value(value: &Value) -> SessionResult<ChatEvent> {
        serde_json::from_value(value.clone()).map_err(SessionError::Json)
    }
}

// ── Session snapshots ─────────────────────────────────────────────────────────

/// One entry of the polled session list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub key: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub spawned_by: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
}

impl SessionSnapshot {
    /// Parse a `sessions.list` payload (an array of snapshots).
    pub fn list_from_value(value: &Value) -> SessionResult<Vec<SessionSnapshot>> {
        serde_json::from_value(value.clone()).map_err(SessionError::Json)
    }
}
