use dioxus::prelude::*;
use services::Access;

use super::dashboard::DashboardTab;
use super::questions::QuestionsTab;
use super::users::UsersTab;
use crate::views::guard::Protected;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AdminTab {
    Dashboard,
    Users,
    Questions,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Dashboard, AdminTab::Users, AdminTab::Questions];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Users => "Users",
            AdminTab::Questions => "Questions",
        }
    }
}

#[component]
pub fn AdminView() -> Element {
    rsx! {
        Protected { access: Access::Admin, AdminPage {} }
    }
}

#[component]
fn AdminPage() -> Element {
    let mut active = use_signal(|| AdminTab::Dashboard);

    rsx! {
        div { class: "page admin-page",
            header { class: "view-header",
                h2 { class: "view-title", "Admin Panel" }
                p { class: "view-subtitle", "Manage users and quiz questions." }
            }
            div { class: "admin-tabs", role: "tablist",
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if active() == tab { "admin-tab admin-tab--active" } else { "admin-tab" },
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            match active() {
                AdminTab::Dashboard => rsx! { DashboardTab {} },
                AdminTab::Users => rsx! { UsersTab {} },
                AdminTab::Questions => rsx! { QuestionsTab {} },
            }
        }
    }
}
