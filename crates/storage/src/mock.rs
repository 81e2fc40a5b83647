//! Built-in mock data the portal starts with.

use chrono::NaiveDate;
use portal_core::model::{
    NewsId, NewsItem, Question, QuestionId, Role, User, UserId, UserStatus,
};
use thiserror::Error;

use crate::repository::StorageError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] portal_core::Error),

    #[error("invalid seed date {year}-{month}-{day}")]
    Date { year: i32, month: u32, day: u32 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn question(
    id: &str,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
) -> Result<Question, portal_core::Error> {
    let options = options.iter().map(|o| (*o).to_owned()).collect();
    Ok(Question::new(QuestionId::new(id)?, prompt, options, correct)?)
}

/// The five general-knowledge questions every fresh bank starts with.
///
/// # Errors
///
/// Returns `SeedError::Domain` if a question fails validation.
pub fn questions() -> Result<Vec<Question>, SeedError> {
    Ok(vec![
        question(
            "1",
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
        )?,
        question(
            "2",
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
        )?,
        question(
            "3",
            "What is the largest mammal in the world?",
            ["Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
            1,
        )?,
        question(
            "4",
            "Which element has the chemical symbol 'O'?",
            ["Gold", "Oxygen", "Osmium", "Iron"],
            1,
        )?,
        question(
            "5",
            "In which year did World War II end?",
            ["1943", "1944", "1945", "1946"],
            2,
        )?,
    ])
}

fn user(
    id: u64,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
) -> Result<User, portal_core::Error> {
    Ok(User::new(UserId::new(id), name, email, role, status)?)
}

/// # Errors
///
/// Returns `SeedError::Domain` if a user fails validation.
pub fn users() -> Result<Vec<User>, SeedError> {
    Ok(vec![
        user(1, "Admin User", "admin@example.com", Role::Admin, UserStatus::Active)?,
        user(2, "Regular User", "user@example.com", Role::User, UserStatus::Active)?,
        user(3, "John Doe", "john@example.com", Role::User, UserStatus::Active)?,
        user(4, "Jane Smith", "jane@example.com", Role::User, UserStatus::Inactive)?,
        user(5, "Mike Johnson", "mike@example.com", Role::User, UserStatus::Active)?,
    ])
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SeedError::Date { year, month, day })
}

/// # Errors
///
/// Returns `SeedError::Date` if a publication date is not a calendar date.
pub fn news() -> Result<Vec<NewsItem>, SeedError> {
    Ok(vec![
        NewsItem::new(
            NewsId::new(1),
            "New AI Model Released",
            "A new language model promises faster answers and better reasoning across everyday tasks.",
            "Tech News",
            date(2025, 4, 21)?,
        ),
        NewsItem::new(
            NewsId::new(2),
            "Global Climate Summit Concludes",
            "Leaders agreed on a framework to cut emissions and fund adaptation in vulnerable regions.",
            "World Report",
            date(2025, 4, 20)?,
        ),
        NewsItem::new(
            NewsId::new(3),
            "Space Telescope Captures Distant Galaxy",
            "Astronomers shared images of a galaxy whose light left it over thirteen billion years ago.",
            "Science Daily",
            date(2025, 4, 19)?,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_questions_are_valid_and_ordered() {
        let qs = questions().unwrap();
        let ids: Vec<_> = qs.iter().map(|q| q.id().as_str().to_owned()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(qs[0].correct_text(), "Paris");
        assert_eq!(qs[4].correct_text(), "1945");
    }

    #[test]
    fn exactly_one_mock_admin_and_one_inactive_user() {
        let us = users().unwrap();
        assert_eq!(us.iter().filter(|u| u.is_admin()).count(), 1);
        let inactive: Vec<_> = us.iter().filter(|u| !u.is_active()).collect();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].email(), "jane@example.com");
    }
}
