//! # Conversation
//!
//! The in-memory transcript that streamed replies are written into. Storage
//! of the transcript is up to the caller; every type here is serde
//! serializable for that purpose.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::streaming::{StartOutcome, StreamEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Text is still arriving.
    Sending,
    Sent,
    Error,
    /// Placeholder shown before the first chunk arrives.
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Contact,
    Article,
}

/// A rich reply rendered as a card instead of Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CardData {
    pub fn new(kind: CardKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            url: None,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp_ms: u64,
    pub status: MessageStatus,
    #[serde(default)]
    pub is_streaming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardData>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("an assistant reply is still in progress")]
    ReplyInProgress,
    #[error("no message with id {0}")]
    UnknownMessage(MessageId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a conversation from previously stored messages.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while an assistant reply is loading or streaming.
    pub fn is_reply_in_progress(&self) -> bool {
        self.messages.iter().any(|m| {
            m.role == Role::Assistant && (m.status == MessageStatus::Loading || m.is_streaming)
        })
    }

    /// Appends a user message. The content is trimmed; blank input is rejected,
    /// as is sending while a reply is still in progress.
    pub fn push_user(
        &mut self,
        content: &str,
        timestamp_ms: u64,
    ) -> Result<MessageId, ConversationError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        if self.is_reply_in_progress() {
            return Err(ConversationError::ReplyInProgress);
        }

        let id = MessageId::new();
        self.messages.push(Message {
            id,
            role: Role::User,
            content: content.to_string(),
            timestamp_ms,
            status: MessageStatus::Sent,
            is_streaming: false,
            card: None,
        });
        Ok(id)
    }

    /// Appends an empty assistant placeholder in the `Loading` state.
    pub fn begin_assistant(&mut self, timestamp_ms: u64) -> MessageId {
        let id = MessageId::new();
        self.messages.push(Message {
            id,
            role: Role::Assistant,
            content: String::new(),
            timestamp_ms,
            status: MessageStatus::Loading,
            is_streaming: false,
            card: None,
        });
        id
    }

    /// Replaces a message's content with the latest streamed prefix.
    pub fn apply_partial(
        &mut self,
        id: MessageId,
        text: &str,
        is_done: bool,
    ) -> Result<(), ConversationError> {
        let msg = self.get_mut(id)?;
        msg.content.clear();
        msg.content.push_str(text);
        if is_done {
            msg.status = MessageStatus::Sent;
            msg.is_streaming = false;
        } else {
            msg.status = MessageStatus::Sending;
            msg.is_streaming = true;
        }
        Ok(())
    }

    /// Finishes a reply in one step with a lead-in line and a card, with no
    /// streaming in between.
    pub fn complete_with_card(
        &mut self,
        id: MessageId,
        content: impl Into<String>,
        card: CardData,
    ) -> Result<(), ConversationError> {
        let msg = self.get_mut(id)?;
        msg.content = content.into();
        msg.card = Some(card);
        msg.status = MessageStatus::Sent;
        msg.is_streaming = false;
        Ok(())
    }

    pub fn mark_error(&mut self, id: MessageId) -> Result<(), ConversationError> {
        let msg = self.get_mut(id)?;
        msg.status = MessageStatus::Error;
        msg.is_streaming = false;
        Ok(())
    }

    pub fn remove(&mut self, id: MessageId) -> Option<Message> {
        let idx = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(idx))
    }

    /// The closest user message before `id`: the prompt to resend when the
    /// reply `id` is regenerated.
    pub fn last_user_prompt_before(&self, id: MessageId) -> Option<&str> {
        let idx = self.messages.iter().position(|m| m.id == id)?;
        self.messages[..idx]
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Streams `full_text` into message `id` through `engine`.
    ///
    /// The session only holds a weak reference: once the conversation is
    /// dropped, remaining ticks are ignored.
    pub fn stream_reply(
        this: &Rc<RefCell<Self>>,
        engine: &mut StreamEngine<MessageId>,
        id: MessageId,
        full_text: impl Into<String>,
    ) -> StartOutcome {
        let conversation: Weak<RefCell<Self>> = Rc::downgrade(this);
        engine.start(id, full_text, move |text: &str, is_done: bool| {
            let Some(conversation) = conversation.upgrade() else {
                return;
            };
            if let Err(e) = conversation.borrow_mut().apply_partial(id, text, is_done) {
                log::warn!("dropping streamed text: {e}");
            }
        })
    }

    fn get_mut(&mut self, id: MessageId) -> Result<&mut Message, ConversationError> {
        self.messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ConversationError::UnknownMessage(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_content_is_trimmed() {
        let mut c = Conversation::new();
        let id = c.push_user("  hi there \n", 1).unwrap();
        assert_eq!(c.get(id).map(|m| m.content.as_str()), Some("hi there"));
    }

    #[test]
    fn blank_user_message_is_rejected() {
        let mut c = Conversation::new();
        assert_eq!(c.push_user(" \n\t", 1), Err(ConversationError::EmptyMessage));
        assert!(c.is_empty());
    }

    #[test]
    fn cannot_send_while_reply_loading() {
        let mut c = Conversation::new();
        c.push_user("question", 1).unwrap();
        c.begin_assistant(2);
        assert_eq!(
            c.push_user("another", 3),
            Err(ConversationError::ReplyInProgress)
        );
    }

    #[test]
    fn partial_then_done_updates_status() {
        let mut c = Conversation::new();
        let id = c.begin_assistant(1);

        c.apply_partial(id, "he", false).unwrap();
        let m = c.get(id).unwrap();
        assert_eq!(m.content, "he");
        assert_eq!(m.status, MessageStatus::Sending);
        assert!(m.is_streaming);
        assert!(c.is_reply_in_progress());

        c.apply_partial(id, "hello", true).unwrap();
        let m = c.get(id).unwrap();
        assert_eq!(m.content, "hello");
        assert_eq!(m.status, MessageStatus::Sent);
        assert!(!m.is_streaming);
        assert!(!c.is_reply_in_progress());
    }

    #[test]
    fn partial_for_unknown_message_fails() {
        let mut c = Conversation::new();
        let id = MessageId::new();
        assert_eq!(
            c.apply_partial(id, "x", false),
            Err(ConversationError::UnknownMessage(id))
        );
    }

    #[test]
    fn error_ends_reply() {
        let mut c = Conversation::new();
        let id = c.begin_assistant(1);
        c.mark_error(id).unwrap();
        assert_eq!(c.get(id).map(|m| m.status), Some(MessageStatus::Error));
        assert!(!c.is_reply_in_progress());
    }

    #[test]
    fn regenerate_finds_closest_earlier_prompt() {
        let mut c = Conversation::new();
        c.push_user("first", 1).unwrap();
        let r1 = c.begin_assistant(2);
        c.apply_partial(r1, "answer one", true).unwrap();
        c.push_user("second", 3).unwrap();
        let r2 = c.begin_assistant(4);
        c.apply_partial(r2, "answer two", true).unwrap();

        assert_eq!(c.last_user_prompt_before(r1), Some("first"));
        assert_eq!(c.last_user_prompt_before(r2), Some("second"));
        assert_eq!(c.last_user_prompt_before(MessageId::new()), None);
    }

    #[test]
    fn no_prompt_before_leading_reply() {
        let mut c = Conversation::new();
        let r = c.begin_assistant(1);
        assert_eq!(c.last_user_prompt_before(r), None);
    }

    #[test]
    fn remove_and_clear() {
        let mut c = Conversation::new();
        let id = c.push_user("x", 1).unwrap();
        assert_eq!(c.remove(id).map(|m| m.content), Some("x".to_string()));
        assert_eq!(c.remove(id), None);
        c.push_user("y", 2).unwrap();
        c.clear();
        assert!(c.is_empty());
    }

    fn article() -> CardData {
        CardData {
            description: Some("Core ideas and tooling".to_string()),
            url: Some("https://example.com/article".to_string()),
            ..CardData::new(CardKind::Article, "Frontend best practices")
        }
    }

    #[test]
    fn card_reply_completes_placeholder() {
        let mut c = Conversation::new();
        c.push_user("recommend an article", 1).unwrap();
        let id = c.begin_assistant(2);
        assert!(c.is_reply_in_progress());

        c.complete_with_card(id, "Here is a related article:", article()).unwrap();

        let m = c.get(id).unwrap();
        assert_eq!(m.content, "Here is a related article:");
        assert_eq!(m.status, MessageStatus::Sent);
        assert!(!m.is_streaming);
        assert_eq!(m.card.as_ref().map(|card| card.kind), Some(CardKind::Article));
        assert!(!c.is_reply_in_progress());
        assert!(c.push_user("thanks", 3).is_ok());
    }

    #[test]
    fn card_for_unknown_message_fails() {
        let mut c = Conversation::new();
        let id = MessageId::new();
        assert_eq!(
            c.complete_with_card(id, "x", article()),
            Err(ConversationError::UnknownMessage(id))
        );
    }

    #[test]
    fn message_serde_round_trip() {
        let mut c = Conversation::new();
        c.push_user("hello", 1).unwrap();
        let id = c.begin_assistant(2);
        c.complete_with_card(id, "See this:", article()).unwrap();

        let json = serde_json::to_string(&c).unwrap();
        let back: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn card_field_omitted_when_absent() {
        let mut c = Conversation::new();
        let user = c.push_user("hello", 1).unwrap();
        let id = c.begin_assistant(2);
        let contact = CardData::new(CardKind::Contact, "Ada");
        c.complete_with_card(id, "See this:", contact).unwrap();

        let plain = serde_json::to_value(c.get(user).unwrap()).unwrap();
        assert!(plain.get("card").is_none());

        let with_card = serde_json::to_value(c.get(id).unwrap()).unwrap();
        assert_eq!(
            with_card["card"],
            serde_json::json!({ "type": "contact", "title": "Ada" })
        );
    }

    #[test]
    fn message_without_card_field_deserializes() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "role": "assistant",
            "content": "hi",
            "timestamp_ms": 5,
            "status": "sent"
        }"#;
        let m: Message = serde_json::from_str(json).unwrap();
        assert_eq!(m.card, None);
        assert!(!m.is_streaming);
    }

    #[test]
    fn message_id_display() {
        assert!(MessageId::new().to_string().starts_with("msg-"));
    }
}
