mod chat_vm;
mod news_vm;
mod quiz_vm;
mod user_vm;

pub use chat_vm::{ChatMessageVm, map_chat_message};
pub use news_vm::{NewsCardVm, map_news_card, refresh_label};
pub use quiz_vm::{
    OptionTone, QuizFeedbackVm, QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, start_quiz,
};
pub use user_vm::{UserRowVm, map_user_row};
