use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use storage::repository::QuestionRepository;
use tracing::info;

use crate::error::QuizError;
use super::session::QuizSession;

/// Starts quiz sessions from the question bank.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    shuffle: bool,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            questions,
            shuffle: false,
        }
    }

    /// Shuffle question order when a quiz starts. Restarting keeps that order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Load the question bank and start a fresh session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the bank has no questions.
    /// Returns `QuizError::Storage` if the bank cannot be read.
    pub async fn start_quiz(&self) -> Result<QuizSession, QuizError> {
        let mut questions = self.questions.list_questions().await?;
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        if self.shuffle {
            let mut rng = rng();
            questions.as_mut_slice().shuffle(&mut rng);
        }
        info!(questions = questions.len(), shuffled = self.shuffle, "quiz started");
        QuizSession::new(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn empty_bank_cannot_start() {
        let service = QuizService::new(Arc::new(InMemoryRepository::new()));
        assert!(matches!(service.start_quiz().await, Err(QuizError::Empty)));
    }

    #[tokio::test]
    async fn starts_in_bank_order() {
        let service = QuizService::new(Arc::new(InMemoryRepository::seeded().unwrap()));
        let session = service.start_quiz().await.unwrap();
        assert_eq!(session.total(), 5);
        assert_eq!(
            session.current_question().prompt(),
            "What is the capital of France?"
        );
    }

    #[tokio::test]
    async fn shuffled_quiz_keeps_every_question() {
        let service =
            QuizService::new(Arc::new(InMemoryRepository::seeded().unwrap())).with_shuffle(true);
        let session = service.start_quiz().await.unwrap();
        let mut ids: Vec<_> = session
            .questions()
            .iter()
            .map(|q| q.id().as_str().to_owned())
            .collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }
}
