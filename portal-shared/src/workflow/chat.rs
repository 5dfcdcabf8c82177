//! # Chat transcript
//!
//! A turn moves the transcript through two phases: the visitor message is
//! appended as soon as it is sent ([`TurnPhase::Pending`]), then exactly one
//! bot message is appended once the backend answers or fails
//! ([`TurnPhase::Confirmed`] / [`TurnPhase::Failed`]). Only one turn may be
//! pending at a time.

use tracing::{debug, warn};

use crate::api::PortalApi;
use crate::errors::PortalError;
use crate::models::{ChatMessage, ChatRequest, Timestamp};
use crate::session::{CHAT_HISTORY_KEY, KeyValueStore};

/// Bot message appended when the request fails.
pub const CHAT_ERROR_REPLY: &str = "Désolé, une erreur s'est produite. Veuillez réessayer.";
/// Bot message appended when the backend answers without a reply.
pub const CHAT_EMPTY_REPLY: &str = "Désolé, je n'ai pas pu traiter votre demande.";

/// Where the latest turn stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// No turn was started since the transcript was loaded.
    #[default]
    Idle,
    /// Waiting for the backend.
    Pending,
    /// The backend answered.
    Confirmed,
    /// The request failed and the fallback text was appended.
    Failed,
}

/// How a pending turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResolution {
    /// Reply text to append.
    Confirmed(String),
    /// The request failed.
    Failed,
}

/// A turn accepted by [`ChatTranscript::begin`], to be sent with [`ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// Question as typed.
    pub question: String,
}

/// Ordered chat messages plus the phase of the latest turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    phase: TurnPhase,
}

impl ChatTranscript {
    /// Transcript holding `messages`, with no turn in flight.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            phase: TurnPhase::Idle,
        }
    }

    /// Read the persisted transcript from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Serialization`] when the stored value is not a
    /// valid transcript.
    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, PortalError> {
        let Some(raw) = store.get(CHAT_HISTORY_KEY) else {
            return Ok(Self::default());
        };
        let messages: Vec<ChatMessage> = serde_json::from_str(&raw)?;
        Ok(Self::from_messages(messages))
    }

    /// Read the persisted transcript, starting empty when it is corrupt.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self::try_load(store).unwrap_or_else(|err| {
            warn!(error = %err, "discarding unreadable chat history");
            Self::default()
        })
    }

    /// Write the transcript to `store`. An empty transcript is not written.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) {
        if self.messages.is_empty() {
            return;
        }
        match serde_json::to_string(&self.messages) {
            Ok(raw) => store.set(CHAT_HISTORY_KEY, &raw),
            Err(err) => warn!(error = %err, "failed to serialize chat history"),
        }
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Phase of the latest turn.
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether a turn is waiting for the backend.
    pub fn is_pending(&self) -> bool {
        self.phase == TurnPhase::Pending
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Start a turn by appending the visitor message.
    ///
    /// Returns `None`, leaving the transcript untouched, when `text` is blank
    /// or another turn is pending.
    pub fn begin(&mut self, text: &str, now: Timestamp) -> Option<PendingTurn> {
        if text.trim().is_empty() || self.is_pending() {
            return None;
        }
        self.messages.push(ChatMessage::user(text, now));
        self.phase = TurnPhase::Pending;
        Some(PendingTurn {
            question: text.to_string(),
        })
    }

    /// Finish the pending turn by appending the bot message.
    ///
    /// Does nothing when no turn is pending.
    pub fn resolve(&mut self, resolution: TurnResolution, now: Timestamp) {
        if !self.is_pending() {
            debug!("ignoring chat resolution without a pending turn");
            return;
        }
        let (text, phase) = match resolution {
            TurnResolution::Confirmed(reply) => (reply, TurnPhase::Confirmed),
            TurnResolution::Failed => (CHAT_ERROR_REPLY.to_string(), TurnPhase::Failed),
        };
        let message = match self.messages.iter().rev().find(|message| message.is_user) {
            Some(question) => ChatMessage::bot(text, question, now),
            None => ChatMessage {
                id: now.millis().to_string(),
                text,
                is_user: false,
                timestamp: now,
            },
        };
        self.messages.push(message);
        self.phase = phase;
    }
}

/// Send the pending question and map the answer onto a resolution.
pub async fn ask<A: PortalApi + ?Sized>(api: &A, turn: &PendingTurn) -> TurnResolution {
    let request = ChatRequest {
        question: turn.question.clone(),
    };
    match api.send_chat_message(&request).await {
        Ok(reply) => TurnResolution::Confirmed(
            reply
                .reply
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| CHAT_EMPTY_REPLY.to_string()),
        ),
        Err(err) => {
            warn!(error = %err, "chat request failed");
            TurnResolution::Failed
        }
    }
}

/// Run a whole turn against `transcript`.
///
/// Returns the final phase, or `None` when the input was rejected.
pub async fn run_turn<A: PortalApi + ?Sized>(
    api: &A,
    transcript: &mut ChatTranscript,
    text: &str,
) -> Option<TurnPhase> {
    let turn = transcript.begin(text, Timestamp::now())?;
    let resolution = ask(api, &turn).await;
    transcript.resolve(resolution, Timestamp::now());
    Some(transcript.phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::ChatReply;
    use crate::session::MemoryStore;
    use crate::testing::{Call, FakeApi};
    use chrono::{TimeZone, Utc};

    fn at(seconds: u32) -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 9, 0, seconds).unwrap())
    }

    #[test]
    fn test_begin_rejects_blank_and_concurrent() {
        let mut transcript = ChatTranscript::default();
        assert_eq!(transcript.begin("  ", at(0)), None);
        assert!(transcript.is_empty());

        assert!(transcript.begin("Bonjour", at(1)).is_some());
        assert_eq!(transcript.phase(), TurnPhase::Pending);
        assert_eq!(transcript.begin("Encore", at(2)), None);
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_resolve_appends_one_bot_message() {
        let mut transcript = ChatTranscript::default();
        transcript.begin("Horaires ?", at(0));
        transcript.resolve(TurnResolution::Confirmed("8h-17h".into()), at(1));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, "8h-17h");
        assert!(!messages[1].is_user);
        let user_id: i64 = messages[0].id.parse().unwrap();
        assert_eq!(messages[1].id, (user_id + 1).to_string());
        assert_eq!(transcript.phase(), TurnPhase::Confirmed);
    }

    #[test]
    fn test_resolve_without_pending_is_ignored() {
        let mut transcript = ChatTranscript::default();
        transcript.resolve(TurnResolution::Failed, at(0));
        assert!(transcript.is_empty());
        assert_eq!(transcript.phase(), TurnPhase::Idle);
    }

    #[tokio::test]
    async fn test_turn_with_reply() {
        let api = FakeApi::default().with_chat(Ok(ChatReply {
            reply: Some("Bonjour".into()),
        }));
        let mut transcript = ChatTranscript::default();

        let phase = run_turn(&api, &mut transcript, "Salut").await;

        assert_eq!(phase, Some(TurnPhase::Confirmed));
        let bots: Vec<_> = transcript.messages().iter().filter(|m| !m.is_user).collect();
        assert_eq!(bots.len(), 1);
        assert_eq!(bots[0].text, "Bonjour");
        assert_eq!(
            api.calls(),
            vec![Call::Chat {
                question: "Salut".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_turn_with_empty_reply() {
        let api = FakeApi::default().with_chat(Ok(ChatReply {
            reply: Some(String::new()),
        }));
        let mut transcript = ChatTranscript::default();

        run_turn(&api, &mut transcript, "Salut").await;

        assert_eq!(transcript.messages()[1].text, CHAT_EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_turn_failure_uses_fallback() {
        let api = FakeApi::default().with_chat(Err(ApiError::Network("offline".into())));
        let mut transcript = ChatTranscript::default();

        let phase = run_turn(&api, &mut transcript, "Salut").await;

        assert_eq!(phase, Some(TurnPhase::Failed));
        assert_eq!(transcript.messages().len(), 2);
        assert_eq!(transcript.messages()[1].text, CHAT_ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_blank_turn_sends_nothing() {
        let api = FakeApi::default();
        let mut transcript = ChatTranscript::default();

        assert_eq!(run_turn(&api, &mut transcript, "\n").await, None);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_persisted_transcript_reloads() {
        let store = MemoryStore::new();
        let mut transcript = ChatTranscript::default();
        for (second, text) in [(0, "Bonjour"), (10, "Mes documents ?")] {
            transcript.begin(text, at(second));
            transcript.resolve(TurnResolution::Confirmed("Réponse".into()), at(second + 1));
        }

        transcript.persist(&store);
        let reloaded = ChatTranscript::load(&store);

        assert_eq!(reloaded.messages(), transcript.messages());
        assert_eq!(reloaded.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_empty_transcript_not_written() {
        let store = MemoryStore::new();
        ChatTranscript::default().persist(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let store = MemoryStore::new();
        store.set(CHAT_HISTORY_KEY, "{not json");

        assert!(ChatTranscript::try_load(&store).is_err());
        assert!(ChatTranscript::load(&store).is_empty());
    }
}
