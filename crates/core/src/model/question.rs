use thiserror::Error;

use crate::model::ids::QuestionId;

/// Fewest options a multiple-choice question may have.
pub const MIN_OPTIONS: usize = 2;
/// Most options a multiple-choice question may have.
pub const MAX_OPTIONS: usize = 6;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("a question needs at least 2 options")]
    TooFewOptions,

    #[error("a question can have at most 6 options")]
    TooManyOptions,

    #[error("correct answer {index} is not one of the {len} options")]
    CorrectOutOfRange { index: usize, len: usize },

    #[error("there is no option {index}")]
    UnknownOption { index: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Builds a question, trimming the prompt and every option.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, the option
    /// count is outside `MIN_OPTIONS..=MAX_OPTIONS`, or `correct` is not a valid
    /// option index.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions);
        }
        if options.len() > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions);
        }

        let mut trimmed = Vec::with_capacity(options.len());
        for (index, option) in options.into_iter().enumerate() {
            let option = option.trim().to_owned();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            trimmed.push(option);
        }

        if correct >= trimmed.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct,
                len: trimmed.len(),
            });
        }

        Ok(Self {
            id,
            prompt,
            options: trimmed,
            correct,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Editable working copy of a question.
///
/// A draft may be temporarily invalid (blank prompt, blank options); it only
/// becomes a `Question` through [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuestionDraft {
    /// A new, empty draft with the minimum number of blank options.
    #[must_use]
    pub fn blank(id: QuestionId) -> Self {
        Self {
            id,
            prompt: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            correct: 0,
        }
    }

    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            correct: question.correct,
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Replaces the text of option `index`. Out-of-range indices are ignored.
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Marks option `index` as the correct answer. Out-of-range indices are ignored.
    pub fn set_correct(&mut self, index: usize) {
        if index < self.options.len() {
            self.correct = index;
        }
    }

    /// Appends a blank option.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooManyOptions` when the draft already has
    /// `MAX_OPTIONS` options.
    pub fn add_option(&mut self) -> Result<(), QuestionError> {
        if self.options.len() >= MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions);
        }
        self.options.push(String::new());
        Ok(())
    }

    /// Removes option `index`, keeping the correct mark on the same option
    /// where possible.
    ///
    /// Removing the correct option itself moves the mark to the option before
    /// it (or keeps it on the first option).
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewOptions` when the draft is already at
    /// `MIN_OPTIONS`, and `UnknownOption` for an index past the end.
    pub fn remove_option(&mut self, index: usize) -> Result<(), QuestionError> {
        if self.options.len() <= MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions);
        }
        if index >= self.options.len() {
            return Err(QuestionError::UnknownOption { index });
        }
        self.options.remove(index);
        if self.correct >= index && self.correct > 0 {
            self.correct -= 1;
        }
        Ok(())
    }

    #[must_use]
    pub fn can_add_option(&self) -> bool {
        self.options.len() < MAX_OPTIONS
    }

    #[must_use]
    pub fn can_remove_option(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for the first rule the draft violates.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(self.id, self.prompt, self.options, self.correct)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
