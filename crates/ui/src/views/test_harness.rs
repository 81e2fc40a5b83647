use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use portal_core::model::{User, UserId};
use portal_core::time::fixed_clock;
use services::{
    AppServices, AuthService, ChatService, NewsService, QuestionBankService, QuizService,
    SettingsService, UserAdminService,
};
use storage::repository::{Storage, UserRepository};

use crate::context::{PortalTimings, UiApp, build_app_context, use_portal_state};
use crate::views::{AdminView, HomeView, LearnView, LoginView, NewsView, PlayView, SettingsView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn timings(&self) -> PortalTimings {
        PortalTimings {
            welcome_delay: Duration::ZERO,
            second_welcome_delay: Duration::ZERO,
            typing_delay: Duration::ZERO,
            scrape_delay: Duration::ZERO,
            news_refresh: Duration::from_secs(3600),
            toast_lifetime: Duration::from_secs(3600),
        }
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn question_bank(&self) -> Arc<QuestionBankService> {
        self.services.question_bank()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn user_admin(&self) -> Arc<UserAdminService> {
        self.services.user_admin()
    }

    fn news(&self) -> Arc<NewsService> {
        self.services.news()
    }

    fn chat(&self) -> Arc<ChatService> {
        self.services.chat()
    }

    fn settings(&self) -> Arc<SettingsService> {
        self.services.settings()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Play,
    News,
    Learn,
    Settings,
    Admin,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    user: Option<User>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_portal_state(props.user.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Play => rsx! { PlayView {} },
        ViewKind::News => rsx! { NewsView {} },
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
        ViewKind::Admin => rsx! { AdminView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `view` over seeded mock data, signed in as user `signed_in` if given.
pub async fn setup_view_harness(view: ViewKind, signed_in: Option<u64>) -> ViewHarness {
    let storage = Storage::seeded().expect("seed storage");
    setup_view_harness_with_storage(view, signed_in, storage).await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    signed_in: Option<u64>,
    storage: Storage,
) -> ViewHarness {
    let user = match signed_in {
        Some(id) => storage
            .users
            .get_user(UserId::new(id))
            .await
            .expect("load user"),
        None => None,
    };
    let services = AppServices::from_storage(&storage, fixed_clock(), false);
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, user });
    ViewHarness { dom }
}
