use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, AuthState, ToastState};
use crate::routes::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
    Error(String),
}

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let toasts = use_context::<ToastState>();
    let navigator = use_navigator();

    let mut form = use_signal(SignupForm::default);
    let state = use_signal(|| SubmitState::Idle);

    let submit = use_callback(move |()| {
        let auth_service = ctx.auth();
        let form_value = form();
        let mut auth = auth;
        let mut toasts = toasts;
        let mut state = state;
        spawn(async move {
            state.set(SubmitState::Submitting);
            match auth_service
                .signup(&form_value.email, &form_value.password, &form_value.name)
                .await
            {
                Ok(user) => {
                    toasts.success("Account created. Welcome aboard!");
                    auth.sign_in(user);
                    state.set(SubmitState::Idle);
                    let _ = navigator.push(Route::Home {});
                }
                Err(err) => state.set(SubmitState::Error(err.to_string())),
            }
        });
    });

    let busy = state() == SubmitState::Submitting;
    let current = form();
    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h2 { class: "view-title", "Sign Up" }
                p { class: "view-subtitle", "Create an account to explore the portal." }
                if let SubmitState::Error(message) = state() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "form-label", r#for: "signup-name", "Name" }
                input {
                    id: "signup-name",
                    class: "form-input",
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                label { class: "form-label", r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    class: "form-input",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { class: "form-label", r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    class: "form-input",
                    r#type: "password",
                    value: "{current.password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                p { class: "form-hint", "At least 6 characters." }
                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| submit.call(()),
                    if busy { "Creating account..." } else { "Sign Up" }
                }
                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
