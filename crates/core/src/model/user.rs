use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email address is not valid")]
    InvalidEmail,
}

//
// ─── ROLE / STATUS ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── USER ──────────────────────────────────────────────────────────────────────
//

/// A portal account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    status: UserStatus,
}

impl User {
    /// Build a user, normalizing name and email.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the name is blank or the email is malformed.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        status: UserStatus,
    ) -> Result<Self, UserError> {
        let name = normalize_name(name.into())?;
        let email = normalize_email(&email.into())?;
        Ok(Self {
            id,
            name,
            email,
            role,
            status,
        })
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn status(&self) -> UserStatus {
        self.status
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Apply an edit to name, email and status. The role is never changed.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the draft does not validate; `self` is untouched.
    pub fn apply(&mut self, draft: UserDraft) -> Result<(), UserError> {
        let name = normalize_name(draft.name)?;
        let email = normalize_email(&draft.email)?;
        self.name = name;
        self.email = email;
        self.status = draft.status;
        Ok(())
    }
}

/// Editable copy of a user for the admin edit dialog and the profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
}

impl UserDraft {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            status: user.status,
        }
    }
}

fn normalize_name(name: String) -> Result<String, UserError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(UserError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

/// Trim and lowercase an email address, checking it has the
/// `local@domain.tld` shape.
///
/// # Errors
///
/// Returns `UserError::InvalidEmail` for anything else.
pub fn normalize_email(raw: &str) -> Result<String, UserError> {
    let email = raw.trim().to_lowercase();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !domain_ok || domain.contains('@') || email.contains(char::is_whitespace)
    {
        return Err(UserError::InvalidEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            UserId::new(3),
            "John Doe",
            "John@Example.com",
            Role::User,
            UserStatus::Active,
        )
        .unwrap()
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(user().email(), "john@example.com");
        assert_eq!(normalize_email("  a@b.co ").unwrap(), "a@b.co");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for raw in ["", "plain", "@example.com", "a@", "a@b", "a@.com", "a@b@c.com", "a b@c.com"] {
            assert_eq!(normalize_email(raw), Err(UserError::InvalidEmail), "{raw}");
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = User::new(UserId::new(1), "  ", "a@b.co", Role::User, UserStatus::Active)
            .unwrap_err();
        assert_eq!(err, UserError::EmptyName);
    }

    #[test]
    fn apply_keeps_role_and_rejects_bad_drafts() {
        let mut u = user();
        let mut draft = UserDraft::from_user(&u);
        draft.name = "Johnny".into();
        draft.status = UserStatus::Inactive;
        u.apply(draft).unwrap();
        assert_eq!(u.name(), "Johnny");
        assert!(!u.is_active());
        assert_eq!(u.role(), Role::User);

        let mut bad = UserDraft::from_user(&u);
        bad.email = "nope".into();
        assert_eq!(u.apply(bad), Err(UserError::InvalidEmail));
        assert_eq!(u.email(), "john@example.com");
    }
}
