//! Outbound interaction reply envelope
//!
//! Every outcome of an interaction - success or error - is delivered as
//! exactly one of these, synchronously, as the HTTP response body.

use serde::Serialize;

/// Interaction callback type: PONG acknowledgment
const PONG: u8 = 1;
/// Interaction callback type: CHANNEL_MESSAGE_WITH_SOURCE
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// The single reply envelope used for every interaction outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionReply {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ReplyData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ReplyData {
    content: String,
}

impl InteractionReply {
    /// Acknowledge a PING.
    pub fn pong() -> Self {
        Self {
            kind: PONG,
            data: None,
        }
    }

    /// Wrap a plain-text message for the originating channel.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(ReplyData {
                content: content.into(),
            }),
        }
    }

    /// The message content, if this is a message reply
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.content.as_str())
    }
}
