use portal_core::model::ChatMessage;
use portal_core::time::clock_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageVm {
    pub id: u64,
    pub is_user: bool,
    pub sender: &'static str,
    pub time: String,
    pub content: String,
}

#[must_use]
pub fn map_chat_message(message: &ChatMessage) -> ChatMessageVm {
    ChatMessageVm {
        id: message.id.value(),
        is_user: message.is_user(),
        sender: message.sender.label(),
        time: clock_label(message.sent_at),
        content: message.content.clone(),
    }
}

impl ChatMessageVm {
    #[must_use]
    pub fn bubble_class(&self) -> &'static str {
        if self.is_user {
            "chat-message chat-message--user"
        } else {
            "chat-message chat-message--bot"
        }
    }
}
