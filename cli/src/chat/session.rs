//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//!
//! ## Overview
//!
//! One chat widget instance owns one `ChatSession`: the ordered, append-only
//! list of messages shown in the widget and the text currently typed in its
//! input box. Nothing is persisted; ending the session clears both.
//!
//! Sending appends the user message once and the bot reply once, in that
//! order. Blank input is ignored without recording anything.
//!
use super::reply::select_reply;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// State of one chat widget: transcript plus the draft input.
#[derive(Debug, Default, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft_input: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft input (one keystroke in the widget).
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    #[allow(dead_code)] // Widget state; the terminal host sends each line as it arrives.
    pub fn draft(&self) -> &str {
        &self.draft_input
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// # Send Draft (`send`)
    ///
    /// Records the draft as a user message followed by the bot's reply, clears
    /// the draft and returns the reply. A blank draft is left untouched and
    /// `None` is returned.
    pub fn send(&mut self) -> Option<&ChatMessage> {
        if self.draft_input.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }

        let text = std::mem::take(&mut self.draft_input);
        let reply = select_reply(&text);
        debug!(reply, "Selected chat reply");

        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::bot(reply));
        self.messages.last()
    }

    /// Sets the draft to `text` and sends it.
    pub fn send_text(&mut self, text: impl Into<String>) -> Option<&ChatMessage> {
        self.set_draft(text);
        self.send()
    }

    /// Ends the session, dropping the transcript and the draft.
    pub fn end(&mut self) {
        self.messages.clear();
        self.draft_input.clear();
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::reply::{ASSIGNMENT_REPLY, GREETING_REPLY, THANKS_REPLY};

    #[test]
    fn send_appends_user_then_bot_once() {
        let mut session = ChatSession::new();
        session.set_draft("Hello");

        let reply = session.send().cloned();

        assert_eq!(reply, Some(ChatMessage::bot(GREETING_REPLY)));
        assert_eq!(
            session.messages(),
            &[ChatMessage::user("Hello"), ChatMessage::bot(GREETING_REPLY)]
        );
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn transcript_keeps_order_across_sends() {
        let mut session = ChatSession::new();
        session.send_text("need an assignment");
        session.send_text("thanks");

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        assert_eq!(session.messages()[1].text, ASSIGNMENT_REPLY);
        assert_eq!(session.messages()[3].text, THANKS_REPLY);
    }

    #[test]
    fn user_text_recorded_verbatim() {
        let mut session = ChatSession::new();
        session.send_text("  Hi there  ");
        assert_eq!(session.messages()[0].text, "  Hi there  ");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.send_text("").is_none());
        assert!(session.send_text("   \t").is_none());
        assert!(session.messages().is_empty());
        // The blank draft stays in the input box.
        assert_eq!(session.draft(), "   \t");
    }

    #[test]
    fn end_clears_everything() {
        let mut session = ChatSession::new();
        session.send_text("hi");
        session.set_draft("half-typed");

        session.end();

        assert!(session.messages().is_empty());
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn sender_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);
    }
}
