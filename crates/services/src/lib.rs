#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod chat_service;
pub mod error;
pub mod news_service;
pub mod question_bank_service;
pub mod quiz;
pub mod settings_service;
pub mod user_admin_service;

pub use portal_core::Clock;

pub use app_services::AppServices;
pub use auth_service::{Access, AuthService};
pub use chat_service::ChatService;
pub use error::{
    AppServicesError, AuthError, NewsError, QuestionBankError, QuizError, SettingsError,
    UserAdminError,
};
pub use news_service::{NewsService, ScrapeReport};
pub use question_bank_service::QuestionBankService;
pub use quiz::{
    Advance, AnswerFeedback, AnswerState, QuizProgress, QuizResult, QuizService, QuizSession,
    Verdict,
};
pub use settings_service::{PasswordChange, ProfileDraft, SettingsService};
pub use user_admin_service::{DashboardStats, UserAdminService};
