use std::sync::Arc;

use portal_core::model::NewsItem;
use services::chat_service::WELCOME_GREETING;
use storage::repository::{NewsRepository, Storage, StorageError};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_storage,
};

const ADMIN: u64 = 1;
const REGULAR: u64 = 2;

async fn settle(harness: &mut ViewHarness) {
    for _ in 0..4 {
        harness.drive_async().await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Play, Some(REGULAR)).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing position in {html}");
    assert!(html.contains("Score: 0/5"), "missing score in {html}");
    assert!(
        html.contains("What is the capital of France?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn protected_view_asks_visitors_to_log_in() {
    let mut harness = setup_view_harness(ViewKind::Play, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Please log in to access this page."),
        "missing guard prompt in {html}"
    );
    assert!(html.contains("Go to Login"), "missing login link in {html}");
    assert!(!html.contains("Question 1"), "quiz leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_rejects_regular_users() {
    let mut harness = setup_view_harness(ViewKind::Admin, Some(REGULAR)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("You need administrator access to view this page."),
        "missing admin prompt in {html}"
    );
    assert!(!html.contains("Admin Panel"), "panel leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_shows_dashboard_stats() {
    let mut harness = setup_view_harness(ViewKind::Admin, Some(ADMIN)).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Admin Panel"), "missing title in {html}");
    assert!(html.contains("Total Users"), "missing stats in {html}");
    assert!(html.contains("Active Users"), "missing stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn news_view_lists_headlines() {
    let mut harness = setup_view_harness(ViewKind::News, Some(REGULAR)).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("New AI Model Released"), "missing item in {html}");
    assert!(
        html.contains("Space Telescope Captures Distant Galaxy"),
        "missing item in {html}"
    );
    assert!(html.contains("Scrape"), "missing scrape form in {html}");
    assert!(
        html.contains("Headlines refresh every hour."),
        "subtitle should follow the configured interval in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_lists_courses() {
    let mut harness = setup_view_harness(ViewKind::Learn, Some(REGULAR)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Programming Basics"), "missing course in {html}");
    assert!(html.contains("Coming Soon"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_greets_visitors() {
    let mut harness = setup_view_harness(ViewKind::Home, None).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains(WELCOME_GREETING), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_prefills_profile() {
    let mut harness = setup_view_harness(ViewKind::Settings, Some(REGULAR)).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Regular User"), "missing name in {html}");
    assert!(html.contains("Change Password"), "missing password form in {html}");
    assert!(html.contains("Email notifications"), "missing toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("login-email"), "missing email field in {html}");
    assert!(html.contains("Sign up"), "missing signup link in {html}");
}

struct FailingNewsRepo;

#[async_trait::async_trait]
impl NewsRepository for FailingNewsRepo {
    async fn list_news(&self) -> Result<Vec<NewsItem>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn news_view_reports_storage_failure() {
    let mut storage = Storage::seeded().expect("seed storage");
    storage.news = Arc::new(FailingNewsRepo);
    let mut harness = setup_view_harness_with_storage(ViewKind::News, Some(REGULAR), storage).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
}
