use dioxus::prelude::*;
use portal_core::model::{Preferences, User};
use services::{Access, PasswordChange, ProfileDraft};
use tracing::warn;

use crate::context::{AppContext, AuthState, ThemeState, ToastState};
use crate::views::guard::Protected;

#[component]
pub fn SettingsView() -> Element {
    let auth = use_context::<AuthState>();
    rsx! {
        Protected { access: Access::SignedIn,
            if let Some(user) = auth.current() {
                SettingsPage { user }
            }
        }
    }
}

#[component]
fn SettingsPage(user: User) -> Element {
    rsx! {
        div { class: "page settings-page",
            header { class: "view-header",
                h2 { class: "view-title", "Settings" }
                p { class: "view-subtitle", "Manage your profile and preferences." }
            }
            div { class: "settings-sections",
                ProfileSection { user }
                PasswordSection {}
                PreferencesSection {}
            }
        }
    }
}

#[component]
fn ProfileSection(user: User) -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let toasts = use_context::<ToastState>();
    let user_id = user.id();
    let mut draft = use_signal(|| ProfileDraft::from_user(&user));
    let mut error = use_signal(|| None::<String>);

    let save = move |_: MouseEvent| {
        let settings = ctx.settings();
        let form = draft();
        let mut auth = auth;
        let mut toasts = toasts;
        let mut draft = draft;
        let mut error = error;
        spawn(async move {
            match settings.update_profile(user_id, form).await {
                Ok(updated) => {
                    draft.set(ProfileDraft::from_user(&updated));
                    auth.sign_in(updated);
                    error.set(None);
                    toasts.success("Profile updated.");
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let current = draft();
    rsx! {
        section { class: "settings-card",
            h3 { "Profile" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            label { class: "form-label", r#for: "profile-name", "Name" }
            input {
                id: "profile-name",
                class: "form-input",
                r#type: "text",
                value: "{current.name}",
                oninput: move |evt| draft.write().name = evt.value(),
            }
            label { class: "form-label", r#for: "profile-email", "Email" }
            input {
                id: "profile-email",
                class: "form-input",
                r#type: "email",
                value: "{current.email}",
                oninput: move |evt| draft.write().email = evt.value(),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: save,
                "Save Profile"
            }
        }
    }
}

#[component]
fn PasswordSection() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<ToastState>();
    let mut form = use_signal(PasswordChange::default);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let mut toasts = toasts;
        let change = form();
        match ctx.settings().change_password(&change) {
            Ok(()) => {
                form.set(PasswordChange::default());
                error.set(None);
                toasts.success("Password changed.");
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let current = form();
    rsx! {
        section { class: "settings-card",
            h3 { "Change Password" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            label { class: "form-label", r#for: "password-current", "Current password" }
            input {
                id: "password-current",
                class: "form-input",
                r#type: "password",
                value: "{current.current}",
                oninput: move |evt| form.write().current = evt.value(),
            }
            label { class: "form-label", r#for: "password-new", "New password" }
            input {
                id: "password-new",
                class: "form-input",
                r#type: "password",
                value: "{current.new}",
                oninput: move |evt| form.write().new = evt.value(),
            }
            label { class: "form-label", r#for: "password-confirm", "Confirm new password" }
            input {
                id: "password-confirm",
                class: "form-input",
                r#type: "password",
                value: "{current.confirm}",
                oninput: move |evt| form.write().confirm = evt.value(),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: submit,
                "Update Password"
            }
        }
    }
}

#[component]
fn PreferencesSection() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = use_context::<ThemeState>();
    let toasts = use_context::<ToastState>();
    let prefs = use_signal(Preferences::default);

    let settings_for_load = ctx.settings();
    let settings_for_theme = ctx.settings();
    let settings_for_notifications = ctx.settings();
    use_hook(move || {
        let settings = settings_for_load.clone();
        let mut prefs = prefs;
        spawn(async move {
            match settings.load_preferences().await {
                Ok(loaded) => prefs.set(loaded),
                Err(err) => warn!(error = %err, "could not load preferences"),
            }
        })
    });

    let dark = theme.current().is_dark();
    let notifications = prefs().email_notifications;

    rsx! {
        section { class: "settings-card",
            h3 { "Preferences" }
            label { class: "settings-toggle",
                input {
                    r#type: "checkbox",
                    checked: dark,
                    onchange: move |_| {
                        let settings = settings_for_theme.clone();
                        let mut theme = theme;
                        let mut prefs = prefs;
                        let mut toasts = toasts;
                        spawn(async move {
                            match settings.toggle_theme().await {
                                Ok(saved) => {
                                    theme.set(saved.theme);
                                    prefs.set(saved);
                                }
                                Err(err) => {
                                    warn!(error = %err, "theme toggle failed");
                                    toasts.error("Couldn't save your theme preference.");
                                }
                            }
                        });
                    },
                }
                span { "Dark mode" }
            }
            label { class: "settings-toggle",
                input {
                    r#type: "checkbox",
                    checked: notifications,
                    onchange: move |evt| {
                        let enabled = evt.checked();
                        let settings = settings_for_notifications.clone();
                        let mut prefs = prefs;
                        let mut toasts = toasts;
                        spawn(async move {
                            match settings.set_email_notifications(enabled).await {
                                Ok(saved) => prefs.set(saved),
                                Err(err) => {
                                    warn!(error = %err, "notification preference not saved");
                                    toasts.error("Couldn't save your notification preference.");
                                }
                            }
                        });
                    },
                }
                span { "Email notifications" }
            }
        }
    }
}
