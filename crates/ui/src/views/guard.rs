use dioxus::prelude::*;
use dioxus_router::Link;
use services::Access;

use crate::context::AuthState;
use crate::routes::Route;

/// Renders `children` only for visitors `access` allows; everyone else gets a
/// prompt pointing at the login page.
#[component]
pub fn Protected(access: Access, children: Element) -> Element {
    let auth = use_context::<AuthState>();
    let user = auth.current();
    if access.allows(user.as_ref()) {
        return children;
    }

    let message = match (access, user.is_some()) {
        (Access::Admin, true) => "You need administrator access to view this page.",
        _ => "Please log in to access this page.",
    };
    rsx! {
        div { class: "page guard",
            h2 { class: "view-title", "Access restricted" }
            p { class: "guard-message", "{message}" }
            Link { class: "btn btn-primary", to: Route::Login {}, "Go to Login" }
        }
    }
}
