use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, AuthState, ToastState};
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Error(String),
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let toasts = use_context::<ToastState>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let state = use_signal(|| SubmitState::Idle);

    let submit = use_callback(move |()| {
        let auth_service = ctx.auth();
        let email = email();
        let password = password();
        let mut auth = auth;
        let mut toasts = toasts;
        let mut state = state;
        spawn(async move {
            state.set(SubmitState::Submitting);
            match auth_service.login(&email, &password).await {
                Ok(user) => {
                    toasts.success(format!("Welcome back, {}!", user.name()));
                    auth.sign_in(user);
                    state.set(SubmitState::Idle);
                    let _ = navigator.push(Route::Home {});
                }
                Err(err) => state.set(SubmitState::Error(err.to_string())),
            }
        });
    });

    let busy = state() == SubmitState::Submitting;
    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h2 { class: "view-title", "Login" }
                p { class: "view-subtitle", "Sign in with your portal account." }
                if let SubmitState::Error(message) = state() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "form-label", r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "form-label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "form-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| submit.call(()),
                    if busy { "Signing in..." } else { "Login" }
                }
                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
