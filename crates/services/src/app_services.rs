use std::sync::Arc;

use storage::repository::{PreferencesRepository, Storage};

use crate::auth_service::AuthService;
use crate::chat_service::ChatService;
use crate::error::AppServicesError;
use crate::news_service::NewsService;
use crate::question_bank_service::QuestionBankService;
use crate::quiz::QuizService;
use crate::settings_service::SettingsService;
use crate::user_admin_service::UserAdminService;
use crate::Clock;

/// Assembles the app-facing services over one shared storage.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    question_bank: Arc<QuestionBankService>,
    auth: Arc<AuthService>,
    user_admin: Arc<UserAdminService>,
    news: Arc<NewsService>,
    chat: Arc<ChatService>,
    settings: Arc<SettingsService>,
}

impl AppServices {
    /// Build services over in-memory mock data, keeping preferences in `preferences`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Seed` if the mock data cannot be loaded.
    pub fn new_seeded(
        clock: Clock,
        preferences: Arc<dyn PreferencesRepository>,
        shuffle_quiz: bool,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::seeded()?.with_preferences(preferences);
        Ok(Self::from_storage(&storage, clock, shuffle_quiz))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, shuffle_quiz: bool) -> Self {
        let user_admin = UserAdminService::new(
            Arc::clone(&storage.users),
            Arc::clone(&storage.questions),
        );
        let settings = SettingsService::new(Arc::clone(&storage.preferences), user_admin.clone());

        Self {
            quiz: Arc::new(
                QuizService::new(Arc::clone(&storage.questions)).with_shuffle(shuffle_quiz),
            ),
            question_bank: Arc::new(QuestionBankService::new(Arc::clone(&storage.questions))),
            auth: Arc::new(AuthService::new(Arc::clone(&storage.users))),
            user_admin: Arc::new(user_admin),
            news: Arc::new(NewsService::new(Arc::clone(&storage.news))),
            chat: Arc::new(ChatService::new(clock)),
            settings: Arc::new(settings),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn user_admin(&self) -> Arc<UserAdminService> {
        Arc::clone(&self.user_admin)
    }

    #[must_use]
    pub fn news(&self) -> Arc<NewsService> {
        Arc::clone(&self.news)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}
