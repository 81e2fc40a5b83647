use std::sync::Arc;

use portal_core::model::{Preferences, Theme, User, UserDraft, UserId};
use storage::repository::{PreferencesRepository, StorageError};
use tracing::{info, warn};

use crate::error::{SettingsError, UserAdminError};
use crate::user_admin_service::UserAdminService;

/// Minimum length for a new password.
pub const MIN_NEW_PASSWORD_LEN: usize = 6;

/// Profile form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
}

impl ProfileDraft {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// Password change form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// # Errors
    ///
    /// Returns the first `SettingsError` password rule the form breaks.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.current.is_empty() {
            return Err(SettingsError::CurrentPasswordRequired);
        }
        if self.new.chars().count() < MIN_NEW_PASSWORD_LEN {
            return Err(SettingsError::PasswordTooShort {
                min: MIN_NEW_PASSWORD_LEN,
            });
        }
        if self.new == self.current {
            return Err(SettingsError::PasswordUnchanged);
        }
        if self.new != self.confirm {
            return Err(SettingsError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct SettingsService {
    preferences: Arc<dyn PreferencesRepository>,
    profiles: UserAdminService,
}

impl SettingsService {
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferencesRepository>, profiles: UserAdminService) -> Self {
        Self {
            preferences,
            profiles,
        }
    }

    /// Load stored preferences (or defaults if missing or unreadable).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if the store cannot be reached.
    pub async fn load_preferences(&self) -> Result<Preferences, SettingsError> {
        match self.preferences.load_preferences().await {
            Ok(prefs) => Ok(prefs.unwrap_or_default()),
            Err(StorageError::Serialization(err)) => {
                warn!(error = %err, "stored preferences unreadable, using defaults");
                Ok(Preferences::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if preferences cannot be read or written.
    pub async fn set_theme(&self, theme: Theme) -> Result<Preferences, SettingsError> {
        let mut prefs = self.load_preferences().await?;
        prefs.theme = theme;
        self.save(prefs).await
    }

    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if preferences cannot be read or written.
    pub async fn toggle_theme(&self) -> Result<Preferences, SettingsError> {
        let mut prefs = self.load_preferences().await?;
        prefs.theme = prefs.theme.toggled();
        self.save(prefs).await
    }

    /// # Errors
    ///
    /// Returns `SettingsError::Storage` if preferences cannot be read or written.
    pub async fn set_email_notifications(
        &self,
        enabled: bool,
    ) -> Result<Preferences, SettingsError> {
        let mut prefs = self.load_preferences().await?;
        prefs.email_notifications = enabled;
        self.save(prefs).await
    }

    async fn save(&self, prefs: Preferences) -> Result<Preferences, SettingsError> {
        if let Err(err) = self.preferences.save_preferences(&prefs).await {
            warn!(error = %err, "failed to save preferences");
            return Err(err.into());
        }
        info!(theme = %prefs.theme, email_notifications = prefs.email_notifications, "preferences saved");
        Ok(prefs)
    }

    /// Update the signed-in user's name and email.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Profile` for an unknown user, invalid fields or an
    /// email that belongs to another account.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        draft: ProfileDraft,
    ) -> Result<User, SettingsError> {
        let user = self
            .profiles
            .get_user(user_id)
            .await?
            .ok_or(UserAdminError::NotFound)?;
        let updated = self
            .profiles
            .update_user(UserDraft {
                id: user.id(),
                name: draft.name,
                email: draft.email,
                status: user.status(),
            })
            .await?;
        Ok(updated)
    }

    /// Check a password change form. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the first password rule the form breaks.
    pub fn change_password(&self, change: &PasswordChange) -> Result<(), SettingsError> {
        change.validate()?;
        info!("password change accepted");
        Ok(())
    }
}
