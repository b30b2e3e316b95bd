//! Host event model.
//!
//! The host runtime delivers events as JSON objects. Only `message` events
//! carry content the plugin cares about:
//!
//! ```json
//! {"type": "message", "data": {"content": "please generate-rm now"}}
//! ```
//!
//! Other event types, and any fields the plugin does not know about, are
//! accepted and ignored. On the command line events arrive as NDJSON, one
//! object per line.

use crate::error::{ReadmeError, Result};
use serde::{Deserialize, Serialize};

/// Event type of chat messages.
pub const MESSAGE_EVENT: &str = "message";

/// Payload of a host event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// An event delivered by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEvent {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
}

impl HostEvent {
    /// A `message` event with the given content.
    #[allow(dead_code)]
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: MESSAGE_EVENT.to_string(),
            data: Some(EventData {
                content: Some(content.into()),
            }),
        }
    }

    /// Decode one NDJSON line.
    pub fn from_json_line(line: &str) -> Result<Self> {
        serde_json::from_str(line)
            .map_err(|e| ReadmeError::UserError(format!("invalid host event: {}", e)))
    }

    /// Message text, for `message` events that carry any.
    pub fn message_content(&self) -> Option<&str> {
        if self.kind != MESSAGE_EVENT {
            return None;
        }
        self.data.as_ref()?.content.as_deref()
    }
}
