use chrono::{DateTime, Utc};

use crate::model::ids::MessageId;

/// Display name of the portal's bot.
pub const BOT_NAME: &str = "AskLegal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => BOT_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Ordered conversation with locally unique, strictly increasing message ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message. Blank input is ignored and returns `None`.
    pub fn push_user(
        &mut self,
        content: &str,
        sent_at: DateTime<Utc>,
    ) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(self.push(Sender::User, content.to_owned(), sent_at))
    }

    pub fn push_bot(&mut self, content: impl Into<String>, sent_at: DateTime<Utc>) -> &ChatMessage {
        self.push(Sender::Bot, content.into(), sent_at)
    }

    fn push(&mut self, sender: Sender, content: String, sent_at: DateTime<Utc>) -> &ChatMessage {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: MessageId::new(self.next_id),
            sender,
            content,
            sent_at,
        });
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn ids_increase_even_within_the_same_instant() {
        let mut log = ChatLog::new();
        let now = fixed_now();
        let a = log.push_bot("hello", now).id;
        let b = log.push_user("hi", now).unwrap().id;
        let c = log.push_bot("welcome", now).id;
        assert!(a < b && b < c);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn blank_user_input_is_ignored() {
        let mut log = ChatLog::new();
        assert!(log.push_user("   ", fixed_now()).is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn sender_labels() {
        let mut log = ChatLog::new();
        let msg = log.push_user("  news? ", fixed_now()).unwrap();
        assert_eq!(msg.content, "news?");
        assert!(msg.is_user());
        assert_eq!(msg.sender.label(), "You");
        assert_eq!(Sender::Bot.label(), "AskLegal");
    }
}
