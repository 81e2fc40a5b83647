use std::sync::Arc;

use portal_core::model::{User, UserDraft, UserId};
use storage::repository::{QuestionRepository, StorageError, UserRepository};
use tracing::info;

use crate::error::UserAdminError;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_questions: usize,
}

#[derive(Clone)]
pub struct UserAdminService {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl UserAdminService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { users, questions }
    }

    /// Users ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `UserAdminError::Storage` if repository access fails.
    pub async fn list_users(&self) -> Result<Vec<User>, UserAdminError> {
        let mut users = self.users.list_users().await?;
        users.sort_by_key(User::id);
        Ok(users)
    }

    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `UserAdminError::Storage` if repository access fails.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, UserAdminError> {
        let user = self.users.get_user(id).await?;
        Ok(user)
    }

    /// Apply name, email and status edits. The role is kept as stored.
    ///
    /// # Errors
    ///
    /// Returns `UserAdminError::NotFound` for an unknown id,
    /// `UserAdminError::User` if the draft does not validate and
    /// `UserAdminError::EmailTaken` if the email belongs to someone else.
    pub async fn update_user(&self, draft: UserDraft) -> Result<User, UserAdminError> {
        let mut user = self
            .users
            .get_user(draft.id)
            .await?
            .ok_or(UserAdminError::NotFound)?;
        user.apply(draft)?;
        self.users.update_user(&user).await.map_err(|err| match err {
            StorageError::NotFound => UserAdminError::NotFound,
            StorageError::Conflict => UserAdminError::EmailTaken,
            other => UserAdminError::Storage(other),
        })?;
        info!(user = user.id().value(), status = %user.status(), "user updated");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `UserAdminError::NotFound` for an unknown id.
    pub async fn delete_user(&self, id: UserId) -> Result<(), UserAdminError> {
        self.users.delete_user(id).await.map_err(|err| match err {
            StorageError::NotFound => UserAdminError::NotFound,
            other => UserAdminError::Storage(other),
        })?;
        info!(user = id.value(), "user deleted");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `UserAdminError::Storage` if repository access fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, UserAdminError> {
        let users = self.users.list_users().await?;
        let questions = self.questions.list_questions().await?;
        Ok(DashboardStats {
            total_users: users.len(),
            active_users: users.iter().filter(|u| u.is_active()).count(),
            total_questions: questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::{Role, UserError, UserStatus};
    use storage::repository::InMemoryRepository;

    fn service() -> UserAdminService {
        let repo = InMemoryRepository::seeded().unwrap();
        UserAdminService::new(Arc::new(repo.clone()), Arc::new(repo))
    }

    #[tokio::test]
    async fn stats_count_active_users_and_questions() {
        let stats = service().dashboard_stats().await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                total_users: 5,
                active_users: 4,
                total_questions: 5
            }
        );
    }

    #[tokio::test]
    async fn update_keeps_role() {
        let service = service();
        let admin = service.list_users().await.unwrap().remove(0);
        let mut draft = UserDraft::from_user(&admin);
        draft.name = "Head Admin".into();
        draft.status = UserStatus::Inactive;
        let updated = service.update_user(draft).await.unwrap();
        assert_eq!(updated.name(), "Head Admin");
        assert_eq!(updated.role(), Role::Admin);
        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn update_rejects_invalid_or_taken_email() {
        let service = service();
        let john = service.list_users().await.unwrap().remove(2);

        let mut bad = UserDraft::from_user(&john);
        bad.email = "nope".into();
        assert!(matches!(
            service.update_user(bad).await,
            Err(UserAdminError::User(UserError::InvalidEmail))
        ));

        let mut taken = UserDraft::from_user(&john);
        taken.email = "mike@example.com".into();
        assert!(matches!(
            service.update_user(taken).await,
            Err(UserAdminError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn delete_removes_and_reports_unknown() {
        let service = service();
        service.delete_user(UserId::new(5)).await.unwrap();
        assert_eq!(service.list_users().await.unwrap().len(), 4);
        assert!(matches!(
            service.delete_user(UserId::new(5)).await,
            Err(UserAdminError::NotFound)
        ));
    }
}
