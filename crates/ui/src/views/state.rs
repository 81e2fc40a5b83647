use dioxus::prelude::*;
use services::{NewsError, QuizError, UserAdminError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptyQuiz => "No questions available yet. Check back later.",
            ViewError::NotFound => "That item no longer exists.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Empty => ViewError::EmptyQuiz,
            _ => ViewError::Unknown,
        }
    }
}

impl From<UserAdminError> for ViewError {
    fn from(err: UserAdminError) -> Self {
        match err {
            UserAdminError::NotFound => ViewError::NotFound,
            _ => ViewError::Unknown,
        }
    }
}

impl From<NewsError> for ViewError {
    fn from(_: NewsError) -> Self {
        ViewError::Unknown
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
