//! Shared error types for the services crate.

use thiserror::Error;

use portal_core::model::{QuestionError, SourceUrlError, UserError};
use storage::mock::SeedError;
use storage::repository::StorageError;

/// Errors emitted while starting a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for the quiz")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuestionBankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("this account is inactive")]
    Inactive,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `UserAdminService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UserAdminError {
    #[error("user not found")]
    NotFound,
    #[error("another user already has this email")]
    EmailTaken,
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `NewsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NewsError {
    #[error(transparent)]
    Url(#[from] SourceUrlError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("current password is required")]
    CurrentPasswordRequired,
    #[error("new password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("new password must differ from the current one")]
    PasswordUnchanged,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error(transparent)]
    Profile(#[from] UserAdminError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
