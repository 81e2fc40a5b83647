use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub(super) fn DashboardTab() -> Element {
    let ctx = use_context::<AppContext>();
    let user_admin = ctx.user_admin();
    let resource = use_resource(move || {
        let user_admin = user_admin.clone();
        async move {
            let stats = user_admin
                .dashboard_stats()
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(stats)
        }
    });

    rsx! {
        section { class: "admin-section",
            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "view-loading", "Loading statistics..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(stats) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "Total Users", value: stats.total_users }
                        StatCard { label: "Active Users", value: stats.active_users }
                        StatCard { label: "Questions", value: stats.total_questions }
                    }
                },
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
