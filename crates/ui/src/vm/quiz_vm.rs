use services::{Advance, AnswerState, QuizService, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionTone::Idle => "quiz-option",
            OptionTone::Selected => "quiz-option quiz-option--selected",
            OptionTone::Correct => "quiz-option quiz-option--correct",
            OptionTone::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub text: String,
    pub tone: OptionTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub correct: bool,
    pub message: String,
}

/// Everything the question card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub position_label: String,
    pub score_label: String,
    pub percent: u8,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub locked: bool,
    pub can_submit: bool,
    pub feedback: Option<QuizFeedbackVm>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score_label: String,
    pub verdict: &'static str,
}

/// Wraps a quiz session for the play view.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.session.select_option(index)
    }

    pub fn submit(&mut self) -> bool {
        self.session.submit_answer().is_some()
    }

    pub fn next(&mut self) -> Option<Advance> {
        self.session.next_question()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn question(&self) -> QuizQuestionVm {
        let session = &self.session;
        let question = session.current_question();
        let progress = session.progress();
        let answer = session.answer_state();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let tone = match answer {
                    AnswerState::Unanswered => OptionTone::Idle,
                    AnswerState::Selected(selected) if selected == index => OptionTone::Selected,
                    AnswerState::Selected(_) => OptionTone::Idle,
                    AnswerState::Submitted { selected, .. } => {
                        if question.is_correct(index) {
                            OptionTone::Correct
                        } else if selected == index {
                            OptionTone::Incorrect
                        } else {
                            OptionTone::Idle
                        }
                    }
                };
                QuizOptionVm {
                    index,
                    text: text.clone(),
                    tone,
                }
            })
            .collect();

        let feedback = session.feedback().map(|feedback| QuizFeedbackVm {
            correct: feedback.is_correct(),
            message: feedback.message(),
        });

        QuizQuestionVm {
            position_label: format!("Question {} of {}", progress.position, progress.total),
            score_label: format!("Score: {}/{}", progress.score, progress.total),
            percent: progress.percent,
            prompt: question.prompt().to_string(),
            options,
            locked: answer.is_submitted(),
            can_submit: matches!(answer, AnswerState::Selected(_)),
            feedback,
            next_label: if progress.is_last_question {
                "Finish Quiz"
            } else {
                "Next Question"
            },
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResultVm> {
        self.session.result().map(|result| QuizResultVm {
            score_label: format!("{} / {}", result.score, result.total),
            verdict: result.verdict.message(),
        })
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the question bank is empty.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_quiz(quiz: &QuizService) -> Result<QuizVm, ViewError> {
    let session = quiz.start_quiz().await?;
    Ok(QuizVm::new(session))
}
