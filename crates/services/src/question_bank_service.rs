use std::sync::Arc;

use portal_core::model::{Question, QuestionDraft, QuestionId};
use storage::repository::QuestionRepository;
use tracing::info;

use crate::error::QuestionBankError;

/// Orchestrates question bank editing for the admin MCQ editor.
#[derive(Clone)]
pub struct QuestionBankService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// All questions in bank order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Storage` if repository access fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, QuestionBankError> {
        let questions = self.questions.list_questions().await?;
        Ok(questions)
    }

    /// Fetch a question by id.
    ///
    /// Returns `Ok(None)` when the question does not exist.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Storage` if repository access fails.
    pub async fn get_question(
        &self,
        id: &QuestionId,
    ) -> Result<Option<Question>, QuestionBankError> {
        let question = self.questions.get_question(id).await?;
        Ok(question)
    }

    /// A blank draft with a freshly generated id.
    #[must_use]
    pub fn new_draft(&self) -> QuestionDraft {
        QuestionDraft::blank(QuestionId::generate())
    }

    /// Validate a draft and store it. Existing ids are replaced in place, new ids
    /// are appended to the end of the bank.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Question` if the draft does not validate.
    /// Returns `QuestionBankError::Storage` if persistence fails.
    pub async fn save(&self, draft: QuestionDraft) -> Result<Question, QuestionBankError> {
        let question = draft.validate()?;
        self.questions.upsert_question(&question).await?;
        info!(id = %question.id(), options = question.options().len(), "question saved");
        Ok(question)
    }

    /// Remove a question from the bank.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Storage` with `StorageError::NotFound` for an
    /// unknown id.
    pub async fn delete(&self, id: &QuestionId) -> Result<(), QuestionBankError> {
        self.questions.delete_question(id).await?;
        info!(%id, "question deleted");
        Ok(())
    }
}
