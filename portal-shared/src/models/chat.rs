use serde::{Deserialize, Serialize};

use super::Timestamp;

/// One entry of the support chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Millisecond timestamp rendered as a string.
    pub id: String,
    /// Message body.
    pub text: String,
    /// `true` for messages typed by the visitor.
    pub is_user: bool,
    /// Creation instant.
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Message typed by the visitor.
    pub fn user(text: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: timestamp.millis().to_string(),
            text: text.into(),
            is_user: true,
            timestamp,
        }
    }

    /// Reply from the assistant, identified one millisecond after `after`.
    pub fn bot(text: impl Into<String>, after: &ChatMessage, timestamp: Timestamp) -> Self {
        let id = after
            .id
            .parse::<i64>()
            .map_or_else(|_| timestamp.millis().to_string(), |id| (id + 1).to_string());
        Self {
            id,
            text: text.into(),
            is_user: false,
            timestamp,
        }
    }
}

/// Body of `POST /chatbot/api/message/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw question text.
    pub question: String,
}

/// Response of the chat endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant answer; may be missing or empty.
    #[serde(default)]
    pub reply: Option<String>,
}
