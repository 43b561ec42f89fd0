//! UI-agnostic chat state
//!
//! The message list for one assistant session. It is append-only and lives
//! only as long as the process; nothing here is persisted.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::replies::GREETING;

/// A chat message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Local>,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Append-only message sequence for one session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    awaiting_reply: bool,
}

impl ChatSession {
    /// Start a session with the assistant greeting as message 1.
    pub fn new() -> Self {
        let mut session = Self::empty();
        session.append(ChatRole::Assistant, GREETING.to_string());
        session
    }

    /// Start a session with no messages.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            awaiting_reply: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Append a user message and mark a reply as pending.
    ///
    /// Returns `None` without touching the session when `text` is blank or a
    /// reply is already pending.
    pub fn submit(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() || self.awaiting_reply {
            return None;
        }

        let id = self.append(ChatRole::User, text.to_string());
        self.awaiting_reply = true;
        Some(id)
    }

    /// Append an assistant reply and clear the pending flag.
    pub fn push_reply(&mut self, body: String) -> u64 {
        self.awaiting_reply = false;
        self.append(ChatRole::Assistant, body)
    }

    fn append(&mut self, role: ChatRole, content: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            created_at: Local::now(),
        });
        id
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
