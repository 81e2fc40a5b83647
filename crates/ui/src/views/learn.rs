use dioxus::prelude::*;
use services::Access;

use super::guard::Protected;

struct Course {
    title: &'static str,
    description: &'static str,
}

const COURSES: [Course; 3] = [
    Course {
        title: "Programming Basics",
        description: "Variables, control flow and functions for complete beginners.",
    },
    Course {
        title: "Web Development",
        description: "Build and style your first pages with HTML, CSS and a little scripting.",
    },
    Course {
        title: "Data Science",
        description: "Explore data, draw charts and find patterns in real datasets.",
    },
];

#[component]
pub fn LearnView() -> Element {
    rsx! {
        Protected { access: Access::SignedIn, LearnPage {} }
    }
}

#[component]
fn LearnPage() -> Element {
    rsx! {
        div { class: "page learn-page",
            header { class: "view-header",
                h2 { class: "view-title", "Learn" }
                p { class: "view-subtitle", "Courses are on the way." }
            }
            div { class: "view-divider" }
            div { class: "course-grid",
                for course in COURSES.iter() {
                    div { class: "course-card", key: "{course.title}",
                        h3 { class: "course-title", "{course.title}" }
                        p { class: "course-description", "{course.description}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: true,
                            "Coming Soon"
                        }
                    }
                }
            }
        }
    }
}
