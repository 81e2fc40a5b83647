use thiserror::Error;

use crate::model::{ParseIdError, PreferencesError, QuestionError, SourceUrlError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    SourceUrl(#[from] SourceUrlError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
