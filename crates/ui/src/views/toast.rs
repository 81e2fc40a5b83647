use dioxus::prelude::*;

use crate::context::{AppContext, ToastKind, ToastState};

#[component]
pub fn ToastHost() -> Element {
    let ctx = use_context::<AppContext>();
    let mut toasts = use_context::<ToastState>();
    let lifetime = ctx.timings().toast_lifetime;

    use_effect(move || {
        if let Some(toast) = toasts.current() {
            let mut toasts = toasts;
            spawn(async move {
                tokio::time::sleep(lifetime).await;
                toasts.dismiss(toast.id);
            });
        }
    });

    let Some(toast) = toasts.current() else {
        return rsx! {};
    };
    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let id = toast.id;
    rsx! {
        div { class: class, role: "status",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}
