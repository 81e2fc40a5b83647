use dioxus::prelude::*;
use portal_core::model::{User, UserDraft, UserId, UserStatus};

use crate::context::{AppContext, ToastState};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_user_row;

#[component]
pub(super) fn UsersTab() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<ToastState>();
    let mut editing = use_signal(|| None::<UserDraft>);
    let mut confirm_delete = use_signal(|| None::<User>);

    let user_admin = ctx.user_admin();
    let resource = use_resource(move || {
        let user_admin = user_admin.clone();
        async move {
            let users = user_admin.list_users().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(users)
        }
    });

    let user_admin_for_save = ctx.user_admin();
    let save = use_callback(move |draft: UserDraft| {
        let user_admin = user_admin_for_save.clone();
        let mut resource = resource;
        let mut editing = editing;
        let mut toasts = toasts;
        spawn(async move {
            match user_admin.update_user(draft).await {
                Ok(user) => {
                    editing.set(None);
                    toasts.success(format!("Saved {}.", user.name()));
                    resource.restart();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let user_admin_for_delete = ctx.user_admin();
    let delete = use_callback(move |id: UserId| {
        let user_admin = user_admin_for_delete.clone();
        let mut resource = resource;
        let mut confirm_delete = confirm_delete;
        let mut toasts = toasts;
        spawn(async move {
            confirm_delete.set(None);
            match user_admin.delete_user(id).await {
                Ok(()) => {
                    toasts.success("User deleted.");
                    resource.restart();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let users = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => {
            return rsx! {
                p { class: "view-loading", "Loading users..." }
            };
        }
        ViewState::Error(err) => {
            return rsx! {
                p { class: "view-error", "{err.message()}" }
            };
        }
        ViewState::Ready(users) => users,
    };

    rsx! {
        section { class: "admin-section",
            table { class: "admin-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in users {
                        UserRow {
                            key: "{user.id()}",
                            user: user.clone(),
                            on_edit: move |user: User| editing.set(Some(UserDraft::from_user(&user))),
                            on_delete: move |user: User| confirm_delete.set(Some(user)),
                        }
                    }
                }
            }
            if let Some(draft) = editing() {
                UserEditDialog {
                    draft,
                    on_save: save,
                    on_cancel: move |()| editing.set(None),
                }
            }
            if let Some(user) = confirm_delete() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Delete user" }
                        p { "Delete {user.name()} ({user.email()})? This cannot be undone." }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| confirm_delete.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(target) = confirm_delete() {
                                        delete.call(target.id());
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let row = map_user_row(&user);
    let for_edit = user.clone();
    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.email}" }
            td { span { class: row.role_class, "{row.role_label}" } }
            td { span { class: row.status_class, "{row.status_label}" } }
            td { class: "admin-actions",
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(user.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn UserEditDialog(
    draft: UserDraft,
    on_save: Callback<UserDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| draft.clone());
    let current = form();
    let active = current.status == UserStatus::Active;

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h3 { "Edit user" }
                label { class: "form-label", r#for: "edit-user-name", "Name" }
                input {
                    id: "edit-user-name",
                    class: "form-input",
                    r#type: "text",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                label { class: "form-label", r#for: "edit-user-email", "Email" }
                input {
                    id: "edit-user-email",
                    class: "form-input",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { class: "form-label", r#for: "edit-user-status", "Status" }
                select {
                    id: "edit-user-status",
                    class: "form-input",
                    value: if active { "active" } else { "inactive" },
                    onchange: move |evt| {
                        form.write().status = if evt.value() == "inactive" {
                            UserStatus::Inactive
                        } else {
                            UserStatus::Active
                        };
                    },
                    option { value: "active", selected: active, "Active" }
                    option { value: "inactive", selected: !active, "Inactive" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_save.call(form()),
                        "Save"
                    }
                }
            }
        }
    }
}
