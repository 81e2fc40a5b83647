use portal_core::model::Question;
use tracing::{debug, info};

use crate::error::QuizError;

//
// ─── ANSWER STATE ──────────────────────────────────────────────────────────────
//

/// Where the current question visit stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Selected(usize),
    Submitted { selected: usize, correct: bool },
}

impl AnswerState {
    #[must_use]
    pub fn selected(self) -> Option<usize> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Selected(index) | AnswerState::Submitted { selected: index, .. } => {
                Some(index)
            }
        }
    }

    #[must_use]
    pub fn is_submitted(self) -> bool {
        matches!(self, AnswerState::Submitted { .. })
    }
}

/// Result signal emitted by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl AnswerFeedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerFeedback::Correct)
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            AnswerFeedback::Correct => "Correct! Well done!".to_string(),
            AnswerFeedback::Incorrect { correct_answer } => {
                format!("Incorrect. The correct answer is: {correct_answer}")
            }
        }
    }
}

/// Outcome of moving past a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Question(usize),
    Completed,
}

//
// ─── READ MODEL ────────────────────────────────────────────────────────────────
//

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub percent: u8,
    pub score: usize,
    pub is_last_question: bool,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Good,
    KeepPracticing,
}

impl Verdict {
    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Verdict::Perfect
        } else if score * 2 >= total {
            Verdict::Good
        } else {
            Verdict::KeepPracticing
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect score! Amazing job!",
            Verdict::Good => "Good job! Keep practicing to improve your score.",
            Verdict::KeepPracticing => "Keep practicing to improve your knowledge!",
        }
    }
}

/// Final score of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub verdict: Verdict,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough of the quiz.
///
/// The question list is fixed for the lifetime of the session. State only changes
/// through `select_option`, `submit_answer`, `next_question` and `restart`;
/// calls made in the wrong state are rejected without touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answer: AnswerState,
    score: usize,
    complete: bool,
}

impl QuizSession {
    /// Create a session positioned on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            questions,
            current: 0,
            answer: AnswerState::Unanswered,
            score: 0,
            complete: false,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// 0-based index of the current question. Frozen once the quiz is complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn answer_state(&self) -> AnswerState {
        self.answer
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.answer.selected()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.answer.is_submitted()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total();
        let percent = ((self.current + 1) * 100 / total).min(100);
        QuizProgress {
            position: self.current + 1,
            total,
            percent: u8::try_from(percent).unwrap_or(100),
            score: self.score,
            is_last_question: self.is_last_question(),
            is_complete: self.complete,
        }
    }

    /// Final result, available once the last question has been advanced past.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.complete.then(|| QuizResult {
            score: self.score,
            total: self.total(),
            verdict: Verdict::for_score(self.score, self.total()),
        })
    }

    /// Feedback for the current question if it has been submitted.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        match self.answer {
            AnswerState::Submitted { correct, .. } => Some(self.feedback_for(correct)),
            _ => None,
        }
    }

    fn feedback_for(&self, correct: bool) -> AnswerFeedback {
        if correct {
            AnswerFeedback::Correct
        } else {
            AnswerFeedback::Incorrect {
                correct_answer: self.current_question().correct_text().to_owned(),
            }
        }
    }

    /// Select an option on the current question. Changing the selection is allowed
    /// until the answer is submitted.
    ///
    /// Returns `false` if the selection was rejected.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.complete || self.answer.is_submitted() {
            debug!(index, state = ?self.answer, "select rejected: answer locked");
            return false;
        }
        if self.current_question().option(index).is_none() {
            debug!(index, "select rejected: no such option");
            return false;
        }
        self.answer = AnswerState::Selected(index);
        true
    }

    /// Lock in the selected option, scoring it if correct.
    ///
    /// Returns `None` if nothing is selected, the answer was already submitted, or
    /// the quiz is complete.
    pub fn submit_answer(&mut self) -> Option<AnswerFeedback> {
        let AnswerState::Selected(selected) = self.answer else {
            debug!(state = ?self.answer, "submit rejected");
            return None;
        };
        if self.complete {
            return None;
        }

        let correct = self.current_question().is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.answer = AnswerState::Submitted { selected, correct };
        debug!(question = self.current, selected, correct, score = self.score, "answer submitted");
        Some(self.feedback_for(correct))
    }

    /// Move past a submitted question. From the last question this completes the
    /// quiz and the index stays where it is.
    ///
    /// Returns `None` if the current answer has not been submitted or the quiz is
    /// already complete.
    pub fn next_question(&mut self) -> Option<Advance> {
        if self.complete || !self.answer.is_submitted() {
            debug!(state = ?self.answer, complete = self.complete, "advance rejected");
            return None;
        }

        if self.is_last_question() {
            self.complete = true;
            info!(score = self.score, total = self.total(), "quiz completed");
            return Some(Advance::Completed);
        }

        self.current += 1;
        self.answer = AnswerState::Unanswered;
        Some(Advance::Question(self.current))
    }

    /// Reset to the first question with a zero score, keeping the same questions.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answer = AnswerState::Unanswered;
        self.score = 0;
        self.complete = false;
        debug!(total = self.total(), "quiz restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::QuestionId;

    fn question(id: &str, correct: usize) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            format!("Question {id}"),
            vec!["A".into(), "B".into(), "C".into()],
            correct,
        )
        .unwrap()
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new((0..n).map(|i| question(&i.to_string(), i % 3)).collect()).unwrap()
    }

    #[test]
    fn empty_session_is_rejected() {
        assert!(matches!(QuizSession::new(Vec::new()), Err(QuizError::Empty)));
    }

    #[test]
    fn starts_on_first_question_unanswered() {
        let s = session(3);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.answer_state(), AnswerState::Unanswered);
        assert!(!s.is_complete());
        assert!(s.result().is_none());
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut s = session(2);
        assert!(s.submit_answer().is_none());
        assert_eq!(s.answer_state(), AnswerState::Unanswered);
    }

    #[test]
    fn next_before_submit_is_a_no_op() {
        let mut s = session(2);
        assert!(s.next_question().is_none());
        assert!(s.select_option(1));
        assert!(s.next_question().is_none());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn selection_can_change_until_submit() {
        let mut s = session(2);
        assert!(s.select_option(2));
        assert!(s.select_option(0));
        assert_eq!(s.selected(), Some(0));
        assert_eq!(s.submit_answer(), Some(AnswerFeedback::Correct));
        assert!(!s.select_option(1));
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut s = session(1);
        assert!(!s.select_option(3));
        assert_eq!(s.answer_state(), AnswerState::Unanswered);
    }

    #[test]
    fn incorrect_feedback_names_the_correct_answer() {
        let mut s = session(2);
        s.select_option(1);
        let feedback = s.submit_answer().unwrap();
        assert_eq!(
            feedback,
            AnswerFeedback::Incorrect {
                correct_answer: "A".into()
            }
        );
        assert_eq!(feedback.message(), "Incorrect. The correct answer is: A");
        assert_eq!(s.feedback(), Some(feedback));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn progress_percent_is_floored() {
        let mut s = session(3);
        assert_eq!(s.progress().percent, 33);
        s.select_option(0);
        s.submit_answer();
        s.next_question();
        let p = s.progress();
        assert_eq!((p.position, p.total, p.percent), (2, 3, 66));
        assert!(!p.is_last_question);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::for_score(5, 5), Verdict::Perfect);
        assert_eq!(Verdict::for_score(3, 5), Verdict::Good);
        assert_eq!(Verdict::for_score(2, 4), Verdict::Good);
        assert_eq!(Verdict::for_score(2, 5), Verdict::KeepPracticing);
        assert_eq!(Verdict::for_score(0, 1), Verdict::KeepPracticing);
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(Verdict::Perfect.message(), "Perfect score! Amazing job!");
        assert_eq!(
            Verdict::Good.message(),
            "Good job! Keep practicing to improve your score."
        );
        assert_eq!(
            Verdict::KeepPracticing.message(),
            "Keep practicing to improve your knowledge!"
        );
    }

    #[test]
    fn transitions_after_completion_are_rejected() {
        let mut s = session(1);
        s.select_option(0);
        s.submit_answer();
        assert_eq!(s.next_question(), Some(Advance::Completed));
        assert!(!s.select_option(1));
        assert!(s.submit_answer().is_none());
        assert!(s.next_question().is_none());
        assert_eq!(s.current_index(), 0);
        assert_eq!(
            s.result(),
            Some(QuizResult {
                score: 1,
                total: 1,
                verdict: Verdict::Perfect
            })
        );
    }
}
