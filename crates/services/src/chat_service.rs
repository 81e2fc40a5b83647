use portal_core::model::ChatLog;
use portal_core::Clock;
use tracing::debug;

pub const WELCOME_GREETING: &str = "Hello! Welcome to ChatBot Portal. How can I help you today?";
pub const WELCOME_HINT: &str =
    "You can explore news, play games, or learn new things after you log in!";
pub const SIGNED_OUT_REPLY: &str =
    "I'm sorry, I can only provide more information after you log in.";

const NEWS_REPLY: &str = "Head over to the News page for the latest headlines.";
const PLAY_REPLY: &str = "Ready for a challenge? The Play page has a quick quiz for you.";
const LEARN_REPLY: &str = "The Learn page lists our upcoming courses. New ones are on the way!";
const HELP_REPLY: &str =
    "I can point you to news, games, or learning resources. What would you like to explore?";

/// Canned replies for the welcome chatbot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatService {
    clock: Clock,
}

impl ChatService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Pick the bot's reply. Keywords are checked case-insensitively in order:
    /// news, play/game, learn.
    #[must_use]
    pub fn reply_to(&self, text: &str, signed_in: bool) -> &'static str {
        if !signed_in {
            return SIGNED_OUT_REPLY;
        }
        let text = text.to_lowercase();
        if text.contains("news") {
            NEWS_REPLY
        } else if text.contains("play") || text.contains("game") {
            PLAY_REPLY
        } else if text.contains("learn") {
            LEARN_REPLY
        } else {
            HELP_REPLY
        }
    }

    /// Append the first welcome message.
    pub fn greet(&self, log: &mut ChatLog) {
        log.push_bot(WELCOME_GREETING, self.clock.now());
    }

    /// Append the follow-up welcome hint.
    pub fn hint(&self, log: &mut ChatLog) {
        log.push_bot(WELCOME_HINT, self.clock.now());
    }

    /// Record the user's message. Returns `false` for blank input.
    pub fn send(&self, log: &mut ChatLog, text: &str) -> bool {
        let sent = log.push_user(text, self.clock.now()).is_some();
        if !sent {
            debug!("blank chat message ignored");
        }
        sent
    }

    /// Append the bot's answer to `text`.
    pub fn respond(&self, log: &mut ChatLog, text: &str, signed_in: bool) {
        let reply = self.reply_to(text, signed_in);
        log.push_bot(reply, self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::Sender;
    use portal_core::time::fixed_clock;

    #[test]
    fn signed_out_users_get_the_login_prompt() {
        let chat = ChatService::new(fixed_clock());
        assert_eq!(chat.reply_to("show me news", false), SIGNED_OUT_REPLY);
    }

    #[test]
    fn keywords_route_in_order() {
        let chat = ChatService::new(fixed_clock());
        assert_eq!(chat.reply_to("Any NEWS today?", true), NEWS_REPLY);
        assert_eq!(chat.reply_to("news about games", true), NEWS_REPLY);
        assert_eq!(chat.reply_to("let's play", true), PLAY_REPLY);
        assert_eq!(chat.reply_to("a game please", true), PLAY_REPLY);
        assert_eq!(chat.reply_to("I want to learn", true), LEARN_REPLY);
        assert_eq!(chat.reply_to("hello", true), HELP_REPLY);
    }

    #[test]
    fn conversation_flow_appends_in_order() {
        let chat = ChatService::new(fixed_clock());
        let mut log = ChatLog::new();
        chat.greet(&mut log);
        chat.hint(&mut log);
        assert!(!chat.send(&mut log, "   "));
        assert!(chat.send(&mut log, "news"));
        chat.respond(&mut log, "news", false);

        let senders: Vec<_> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::Bot, Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(log.messages()[0].content, WELCOME_GREETING);
        assert_eq!(log.messages()[3].content, SIGNED_OUT_REPLY);
    }
}
