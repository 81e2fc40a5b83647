pub mod chat;
mod ids;
mod news;
mod preferences;
mod question;
mod user;

pub use chat::{ChatLog, ChatMessage, Sender, BOT_NAME};
pub use ids::{MessageId, NewsId, ParseIdError, QuestionId, UserId};
pub use news::{NewsItem, SourceUrl, SourceUrlError};
pub use preferences::{Preferences, PreferencesError, Theme};
pub use question::{Question, QuestionDraft, QuestionError, MAX_OPTIONS, MIN_OPTIONS};
pub use user::{normalize_email, Role, User, UserDraft, UserError, UserStatus};
