use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use portal_core::model::{Theme, User};
use services::{
    AuthService, ChatService, NewsService, QuestionBankService, QuizService, SettingsService,
    UserAdminService,
};

/// Delays and intervals the views run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalTimings {
    pub welcome_delay: Duration,
    pub second_welcome_delay: Duration,
    pub typing_delay: Duration,
    pub scrape_delay: Duration,
    pub news_refresh: Duration,
    pub toast_lifetime: Duration,
}

impl Default for PortalTimings {
    fn default() -> Self {
        Self {
            welcome_delay: Duration::from_millis(500),
            second_welcome_delay: Duration::from_millis(1500),
            typing_delay: Duration::from_millis(1500),
            scrape_delay: Duration::from_millis(2000),
            news_refresh: Duration::from_secs(60),
            toast_lifetime: Duration::from_millis(4000),
        }
    }
}

pub trait UiApp: Send + Sync {
    fn timings(&self) -> PortalTimings;

    fn quiz(&self) -> Arc<QuizService>;
    fn question_bank(&self) -> Arc<QuestionBankService>;
    fn auth(&self) -> Arc<AuthService>;
    fn user_admin(&self) -> Arc<UserAdminService>;
    fn news(&self) -> Arc<NewsService>;
    fn chat(&self) -> Arc<ChatService>;
    fn settings(&self) -> Arc<SettingsService>;
}

#[derive(Clone)]
pub struct AppContext {
    timings: PortalTimings,

    quiz: Arc<QuizService>,
    question_bank: Arc<QuestionBankService>,
    auth: Arc<AuthService>,
    user_admin: Arc<UserAdminService>,
    news: Arc<NewsService>,
    chat: Arc<ChatService>,
    settings: Arc<SettingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            timings: app.timings(),
            quiz: app.quiz(),
            question_bank: app.question_bank(),
            auth: app.auth(),
            user_admin: app.user_admin(),
            news: app.news(),
            chat: app.chat(),
            settings: app.settings(),
        }
    }

    #[must_use]
    pub fn timings(&self) -> PortalTimings {
        self.timings
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn user_admin(&self) -> Arc<UserAdminService> {
        Arc::clone(&self.user_admin)
    }

    #[must_use]
    pub fn news(&self) -> Arc<NewsService> {
        Arc::clone(&self.news)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

//
// ─── SHARED UI STATE ───────────────────────────────────────────────────────────
//

/// Signed-in user, shared by the navbar, guards and pages.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    user: Signal<Option<User>>,
}

impl AuthState {
    #[must_use]
    pub fn current(&self) -> Option<User> {
        (self.user)()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.read().as_ref().is_some_and(User::is_admin)
    }

    pub fn sign_in(&mut self, user: User) {
        self.user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState {
    theme: Signal<Theme>,
}

impl ThemeState {
    #[must_use]
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme.set(theme);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// One toast at a time; a newer toast replaces the current one.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastState {
    current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        (self.current)()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        let id = (self.next_id)() + 1;
        self.next_id.set(id);
        self.current.set(Some(Toast { id, kind, message }));
    }

    /// Clear the toast if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.read().as_ref().is_some_and(|toast| toast.id == id) {
            self.current.set(None);
        }
    }
}

/// Create the shared auth, theme and toast state and provide it to descendants.
pub fn use_portal_state(initial_user: Option<User>) -> (AuthState, ThemeState, ToastState) {
    let user = use_signal(move || initial_user);
    let theme = use_signal(Theme::default);
    let toast = use_signal(|| None::<Toast>);
    let next_id = use_signal(|| 0_u64);

    let auth = use_context_provider(|| AuthState { user });
    let theme = use_context_provider(|| ThemeState { theme });
    let toasts = use_context_provider(|| ToastState {
        current: toast,
        next_id,
    });
    (auth, theme, toasts)
}
