use async_trait::async_trait;
use portal_core::model::{
    NewsItem, Preferences, Question, QuestionId, Role, User, UserId, UserStatus,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

use crate::mock::{self, SeedError};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fields for a user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Ordered question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions in bank order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Fetch a question by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend failures; a missing id is `Ok(None)`.
    async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, StorageError>;

    /// Replace the question with the same id in place, or append it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError>;

    /// Remove a question.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id.
    async fn delete_question(&self, id: &QuestionId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if users cannot be read.
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` for backend failures; a missing id is `Ok(None)`.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Look a user up by (already normalized) email.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend failures.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Assign the next id and store the user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the email is already registered.
    async fn insert_new_user(&self, record: NewUserRecord) -> Result<User, StorageError>;

    /// Overwrite an existing user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id and
    /// `StorageError::Conflict` if another user already has the email.
    async fn update_user(&self, user: &User) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for an unknown id.
    async fn delete_user(&self, id: UserId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the feed cannot be read.
    async fn list_news(&self) -> Result<Vec<NewsItem>, StorageError>;
}

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Load stored preferences, `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if stored preferences cannot be read or decoded.
    async fn load_preferences(&self) -> Result<Option<Preferences>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if preferences cannot be written.
    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation backing the whole portal.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
    users: Arc<Mutex<BTreeMap<UserId, User>>>,
    news: Arc<Mutex<Vec<NewsItem>>>,
    preferences: Arc<Mutex<Option<Preferences>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with the portal's mock questions, users and news.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the built-in mock data fails validation.
    pub fn seeded() -> Result<Self, SeedError> {
        let repo = Self::new();
        *lock(&repo.questions)? = mock::questions()?;
        *lock(&repo.users)? = mock::users()?
            .into_iter()
            .map(|user| (user.id(), user))
            .collect();
        *lock(&repo.news)? = mock::news()?;
        Ok(repo)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e| StorageError::Connection(e.to_string()))
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(lock(&self.questions)?.clone())
    }

    async fn get_question(&self, id: &QuestionId) -> Result<Option<Question>, StorageError> {
        let guard = lock(&self.questions)?;
        Ok(guard.iter().find(|q| q.id() == id).cloned())
    }

    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError> {
        let mut guard = lock(&self.questions)?;
        match guard.iter_mut().find(|q| q.id() == question.id()) {
            Some(slot) => *slot = question.clone(),
            None => guard.push(question.clone()),
        }
        debug!(id = %question.id(), total = guard.len(), "upserted question");
        Ok(())
    }

    async fn delete_question(&self, id: &QuestionId) -> Result<(), StorageError> {
        let mut guard = lock(&self.questions)?;
        let before = guard.len();
        guard.retain(|q| q.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        debug!(%id, "deleted question");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        Ok(lock(&self.users)?.values().cloned().collect())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(lock(&self.users)?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let guard = lock(&self.users)?;
        Ok(guard.values().find(|u| u.email() == email).cloned())
    }

    async fn insert_new_user(&self, record: NewUserRecord) -> Result<User, StorageError> {
        let mut guard = lock(&self.users)?;
        if guard.values().any(|u| u.email() == record.email) {
            return Err(StorageError::Conflict);
        }
        let next = guard.keys().next_back().map_or(1, |id| id.value() + 1);
        let user = User::new(
            UserId::new(next),
            record.name,
            record.email,
            record.role,
            record.status,
        )
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
        guard.insert(user.id(), user.clone());
        debug!(id = %user.id(), role = %user.role(), "inserted user");
        Ok(user)
    }

    async fn update_user(&self, user: &User) -> Result<(), StorageError> {
        let mut guard = lock(&self.users)?;
        if !guard.contains_key(&user.id()) {
            return Err(StorageError::NotFound);
        }
        if guard
            .values()
            .any(|other| other.id() != user.id() && other.email() == user.email())
        {
            return Err(StorageError::Conflict);
        }
        guard.insert(user.id(), user.clone());
        debug!(id = %user.id(), "updated user");
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), StorageError> {
        lock(&self.users)?
            .remove(&id)
            .ok_or(StorageError::NotFound)?;
        debug!(%id, "deleted user");
        Ok(())
    }
}

#[async_trait]
impl NewsRepository for InMemoryRepository {
    async fn list_news(&self) -> Result<Vec<NewsItem>, StorageError> {
        Ok(lock(&self.news)?.clone())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn load_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        Ok(*lock(&self.preferences)?)
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        *lock(&self.preferences)? = Some(*preferences);
        Ok(())
    }
}

/// Aggregates the portal repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repo(InMemoryRepository::new())
    }

    /// In-memory storage pre-filled with mock data.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the built-in mock data fails validation.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::from_repo(InMemoryRepository::seeded()?))
    }

    #[must_use]
    pub fn from_repo(repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let news: Arc<dyn NewsRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Self {
            questions,
            users,
            news,
            preferences,
        }
    }

    /// Swap the preferences backend, e.g. for a file-backed store.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Arc<dyn PreferencesRepository>) -> Self {
        self.preferences = preferences;
        self
    }
}
