use std::sync::Arc;

use portal_core::model::{Preferences, Question, QuestionId, Role, Theme, UserStatus};
use storage::local::FilePreferencesStore;
use storage::repository::{
    NewUserRecord, NewsRepository, PreferencesRepository, QuestionRepository, Storage, StorageError,
    UserRepository,
};

fn temp_prefs_path() -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("portal-storage-it-{}", uuid::Uuid::new_v4()))
        .join("preferences.json")
}

#[tokio::test]
async fn seeded_storage_shares_one_backing_store() {
    let storage = Storage::seeded().expect("seed");

    let questions = storage.questions.list_questions().await.unwrap();
    assert_eq!(questions.len(), 5);

    let extra = Question::new(
        QuestionId::new("6").unwrap(),
        "Which planet is largest?",
        vec!["Jupiter".into(), "Saturn".into()],
        0,
    )
    .unwrap();
    storage.questions.upsert_question(&extra).await.unwrap();
    let copy = storage.clone();
    assert_eq!(copy.questions.list_questions().await.unwrap().len(), 6);

    let user = storage
        .users
        .insert_new_user(NewUserRecord {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: Role::User,
            status: UserStatus::Active,
        })
        .await
        .unwrap();
    assert_eq!(user.id().value(), 6);
    let found = copy
        .users
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .expect("inserted user");
    assert_eq!(found.name(), "Ada");

    let news = storage.news.list_news().await.unwrap();
    assert_eq!(news.len(), 3);
}

#[tokio::test]
async fn file_preferences_replace_in_memory_backend() {
    let path = temp_prefs_path();
    let storage = Storage::seeded()
        .expect("seed")
        .with_preferences(Arc::new(FilePreferencesStore::new(&path)));

    assert_eq!(storage.preferences.load_preferences().await.unwrap(), None);
    let prefs = Preferences {
        theme: Theme::Dark,
        email_notifications: true,
    };
    storage.preferences.save_preferences(&prefs).await.unwrap();

    let reopened = FilePreferencesStore::new(&path);
    assert_eq!(reopened.load_preferences().await.unwrap(), Some(prefs));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let storage = Storage::seeded().expect("seed");
    let id = QuestionId::new("1").unwrap();
    storage.questions.delete_question(&id).await.unwrap();
    let err = storage.questions.delete_question(&id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}
