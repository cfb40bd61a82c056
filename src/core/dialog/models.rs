//! Dialog and Message models
//!
//! Plain data carried through the preprocessing pipeline. Stages mutate these
//! in place; nothing here knows about storage or stages.

use serde::{Deserialize, Serialize};

/// A normalized word fragment. Has no identity beyond its position in a
/// message's token sequence.
pub type Token = String;

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store identifier
    pub id: i64,
    /// Sender reference
    pub from_id: i64,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub date: i64,
    /// Raw message text
    #[serde(default)]
    pub text: String,
    /// Detected language code, unset until language identification runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Token sequence, unset until tokenization runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
}

impl Message {
    pub fn new(id: i64, from_id: i64, date: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            from_id,
            date,
            text: text.into(),
            lang: None,
            tokens: None,
        }
    }

    /// Number of tokens, zero when the message was never tokenized.
    pub fn token_count(&self) -> usize {
        self.tokens.as_ref().map_or(0, Vec::len)
    }
}

/// A conversation thread: ordered messages, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Dialog {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Total tokens over all messages.
    pub fn token_count(&self) -> usize {
        self.messages.iter().map(Message::token_count).sum()
    }

    /// Distinct language tags in first-seen message order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for lang in self.messages.iter().filter_map(|m| m.lang.as_deref()) {
            if !seen.contains(&lang) {
                seen.push(lang);
            }
        }
        seen
    }
}
