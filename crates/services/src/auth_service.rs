use std::sync::Arc;

use portal_core::model::{normalize_email, Role, User, UserError, UserStatus};
use storage::repository::{NewUserRecord, StorageError, UserRepository};
use tracing::{debug, info};

use crate::error::AuthError;

/// Minimum length for a new account password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Pages that can sit behind a sign-in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    Admin,
}

impl Access {
    /// Whether `user` may open a page with this access level.
    #[must_use]
    pub fn allows(self, user: Option<&User>) -> bool {
        match self {
            Access::Public => true,
            Access::SignedIn => user.is_some(),
            Access::Admin => user.is_some_and(User::is_admin),
        }
    }
}

/// Mock sign-in against the in-memory user list. Passwords are never stored.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Sign in with an email (matched case-insensitively) and any non-empty password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or an empty password.
    /// Returns `AuthError::Inactive` if the account is deactivated.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        let Ok(email) = normalize_email(email) else {
            return Err(AuthError::InvalidCredentials);
        };
        let Some(user) = self.users.find_by_email(&email).await? else {
            debug!(%email, "login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };
        if !user.is_active() {
            debug!(%email, "login rejected: inactive");
            return Err(AuthError::Inactive);
        }
        info!(user = user.id().value(), role = %user.role(), "signed in");
        Ok(user)
    }

    /// Register a new active account with the `user` role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::User` for a blank name or malformed email,
    /// `AuthError::PasswordTooShort` for a short password, and
    /// `AuthError::EmailTaken` if the email is already registered.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, AuthError> {
        if name.trim().is_empty() {
            return Err(UserError::EmptyName.into());
        }
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        let record = NewUserRecord {
            name: name.trim().to_owned(),
            email,
            role: Role::User,
            status: UserStatus::Active,
        };
        let user = self
            .users
            .insert_new_user(record)
            .await
            .map_err(|err| match err {
                StorageError::Conflict => AuthError::EmailTaken,
                other => AuthError::Storage(other),
            })?;
        info!(user = user.id().value(), "account created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    fn service() -> AuthService {
        AuthService::new(Arc::new(InMemoryRepository::seeded().unwrap()))
    }

    #[tokio::test]
    async fn login_matches_email_case_insensitively() {
        let user = service().login("  ADMIN@example.com ", "anything").await.unwrap();
        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn login_rejects_unknown_inactive_and_empty_password() {
        let service = service();
        assert!(matches!(
            service.login("ghost@example.com", "secret").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("jane@example.com", "secret").await,
            Err(AuthError::Inactive)
        ));
        assert!(matches!(
            service.login("user@example.com", "").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn signup_creates_active_user_account() {
        let service = service();
        let user = service
            .signup("New@Example.com", "secret1", " New Person ")
            .await
            .unwrap();
        assert_eq!(user.email(), "new@example.com");
        assert_eq!(user.name(), "New Person");
        assert_eq!(user.role(), Role::User);
        assert!(user.is_active());

        let again = service.login("new@example.com", "x").await.unwrap();
        assert_eq!(again.id(), user.id());
    }

    #[tokio::test]
    async fn signup_validates_fields() {
        let service = service();
        assert!(matches!(
            service.signup("a@b.co", "secret1", "  ").await,
            Err(AuthError::User(UserError::EmptyName))
        ));
        assert!(matches!(
            service.signup("not-an-email", "secret1", "Name").await,
            Err(AuthError::User(UserError::InvalidEmail))
        ));
        assert!(matches!(
            service.signup("a@b.co", "12345", "Name").await,
            Err(AuthError::PasswordTooShort { min: 6 })
        ));
        assert!(matches!(
            service.signup("john@example.com", "secret1", "John").await,
            Err(AuthError::EmailTaken)
        ));
    }

    #[test]
    fn access_levels() {
        let admin = User::new(
            portal_core::model::UserId::new(1),
            "Admin",
            "admin@example.com",
            Role::Admin,
            UserStatus::Active,
        )
        .unwrap();
        let user = User::new(
            portal_core::model::UserId::new(2),
            "User",
            "user@example.com",
            Role::User,
            UserStatus::Active,
        )
        .unwrap();
        assert!(Access::Public.allows(None));
        assert!(!Access::SignedIn.allows(None));
        assert!(Access::SignedIn.allows(Some(&user)));
        assert!(!Access::Admin.allows(Some(&user)));
        assert!(Access::Admin.allows(Some(&admin)));
    }
}
