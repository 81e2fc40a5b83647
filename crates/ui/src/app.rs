use dioxus::prelude::*;
use dioxus_router::Router;
use tracing::warn;

use crate::context::{AppContext, use_portal_state};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let (_auth, mut theme, _toasts) = use_portal_state(None);

    // Stored theme is applied once at startup.
    use_hook(move || {
        let settings = ctx.settings();
        spawn(async move {
            match settings.load_preferences().await {
                Ok(prefs) => theme.set(prefs.theme),
                Err(err) => warn!(error = %err, "could not load preferences"),
            }
        })
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title.
        document::Title { "Portal" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
