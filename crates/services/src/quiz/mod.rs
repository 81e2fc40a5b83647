mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use session::{
    Advance, AnswerFeedback, AnswerState, QuizProgress, QuizResult, QuizSession, Verdict,
};
pub use workflow::QuizService;
