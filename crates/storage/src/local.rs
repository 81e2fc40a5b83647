use async_trait::async_trait;
use portal_core::model::Preferences;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::repository::{PreferencesRepository, StorageError};

/// Preferences kept in a small JSON file, e.g. `{"theme":"dark","email_notifications":true}`.
#[derive(Debug, Clone)]
pub struct FilePreferencesStore {
    path: PathBuf,
}

impl FilePreferencesStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferencesRepository for FilePreferencesStore {
    async fn load_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored preferences");
                return Ok(None);
            }
            Err(err) => return Err(StorageError::Connection(err.to_string())),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::Connection(err.to_string()))?;
        }
        let json = serde_json::to_string_pretty(preferences)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| StorageError::Connection(err.to_string()))?;
        debug!(path = %self.path.display(), theme = %preferences.theme, "saved preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::model::Theme;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("portal-prefs-{}", uuid::Uuid::new_v4()))
            .join("nested")
            .join("preferences.json")
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let store = FilePreferencesStore::new(temp_path());
        assert!(store.load_preferences().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_creates_parent_dirs_and_round_trips() {
        let path = temp_path();
        let store = FilePreferencesStore::new(&path);
        let prefs = Preferences {
            theme: Theme::Dark,
            email_notifications: false,
        };
        store.save_preferences(&prefs).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.load_preferences().await.unwrap(), Some(prefs));
        let _ = fs::remove_dir_all(path.ancestors().nth(2).unwrap());
    }

    #[tokio::test]
    async fn partial_file_falls_back_to_field_defaults() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();
        let loaded = FilePreferencesStore::new(&path)
            .load_preferences()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert!(loaded.email_notifications);
        let _ = fs::remove_dir_all(path.ancestors().nth(2).unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let err = FilePreferencesStore::new(&path)
            .load_preferences()
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
        let _ = fs::remove_dir_all(path.ancestors().nth(2).unwrap());
    }
}
