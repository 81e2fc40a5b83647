use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use tracing::warn;

use crate::context::{AppContext, AuthState, ThemeState, ToastState};
use crate::views::{
    AdminView, HomeView, LearnView, LoginView, NewsView, NotFoundView, PlayView, SettingsView,
    SignupView, ToastHost,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
        #[route("/news", NewsView)] News {},
        #[route("/play", PlayView)] Play {},
        #[route("/learn", LearnView)] Learn {},
        #[route("/settings", SettingsView)] Settings {},
        #[route("/admin", AdminView)] Admin {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let theme = use_context::<ThemeState>();
    let class = if theme.current().is_dark() {
        "app theme-dark"
    } else {
        "app theme-light"
    };
    rsx! {
        div { class: class,
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let mut auth = use_context::<AuthState>();
    let navigator = use_navigator();
    let user = auth.current();

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Portal" }
            ul { class: "navbar-links",
                li { Link { to: Route::Home {}, "Home" } }
                if user.is_some() {
                    li { Link { to: Route::News {}, "News" } }
                    li { Link { to: Route::Play {}, "Play" } }
                    li { Link { to: Route::Learn {}, "Learn" } }
                    li { Link { to: Route::Settings {}, "Settings" } }
                }
                if auth.is_admin() {
                    li { Link { to: Route::Admin {}, "Admin" } }
                }
            }
            div { class: "navbar-actions",
                ThemeToggle {}
                match user {
                    Some(user) => rsx! {
                        span { class: "navbar-user", "{user.name()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                auth.sign_out();
                                let _ = navigator.push(Route::Home {});
                            },
                            "Logout"
                        }
                    },
                    None => rsx! {
                        Link { class: "btn btn-secondary", to: Route::Login {}, "Login" }
                        Link { class: "btn btn-primary", to: Route::Signup {}, "Sign Up" }
                    },
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = use_context::<ThemeState>();
    let toasts = use_context::<ToastState>();
    let label = if theme.current().is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };

    rsx! {
        button {
            class: "btn theme-toggle",
            r#type: "button",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let settings = ctx.settings();
                let mut theme = theme;
                let mut toasts = toasts;
                spawn(async move {
                    match settings.toggle_theme().await {
                        Ok(prefs) => theme.set(prefs.theme),
                        Err(err) => {
                            warn!(error = %err, "theme toggle failed");
                            theme.set(theme.current().toggled());
                            toasts.error("Couldn't save your theme preference.");
                        }
                    }
                });
            },
            "{label}"
        }
    }
}
