use dioxus::prelude::*;
use services::Access;

use crate::context::AppContext;
use crate::views::guard::Protected;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizQuestionVm, QuizResultVm, QuizVm, start_quiz};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizIntent {
    Select(usize),
    Submit,
    Next,
    Restart,
}

#[component]
pub fn PlayView() -> Element {
    rsx! {
        Protected { access: Access::SignedIn, PlayPage {} }
    }
}

#[component]
fn PlayPage() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| None::<QuizVm>);

    let quiz_service = ctx.quiz();
    let resource = use_resource(move || {
        let quiz = quiz_service.clone();
        let mut vm = vm;
        async move {
            let started = start_quiz(&quiz).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut guard = vm.write();
        let Some(quiz) = guard.as_mut() else {
            return;
        };
        match intent {
            QuizIntent::Select(index) => {
                quiz.select(index);
            }
            QuizIntent::Submit => {
                quiz.submit();
            }
            QuizIntent::Next => {
                quiz.next();
            }
            QuizIntent::Restart => quiz.restart(),
        }
    });

    let state = view_state_from_resource(&resource);
    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "view-loading", "Loading quiz..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "view-error", "{err.message()}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let mut resource = resource;
                    resource.restart();
                },
                "Retry"
            }
        },
        ViewState::Ready(()) => {
            let current = vm.read().as_ref().map(|quiz| (quiz.question(), quiz.result()));
            match current {
                None => rsx! {
                    p { class: "view-loading", "Loading quiz..." }
                },
                Some((_, Some(result))) => rsx! {
                    QuizSummary { result, dispatch }
                },
                Some((question, None)) => rsx! {
                    QuestionCard { question, dispatch }
                },
            }
        }
    };

    rsx! {
        div { class: "page play-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
                p { class: "view-subtitle", "Test your general knowledge." }
            }
            {body}
        }
    }
}

#[component]
fn QuestionCard(question: QuizQuestionVm, dispatch: Callback<QuizIntent>) -> Element {
    let locked = question.locked;
    rsx! {
        section { class: "quiz-card",
            div { class: "quiz-meta",
                span { class: "quiz-position", "{question.position_label}" }
                span { class: "quiz-score", "{question.score_label}" }
            }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {question.percent}%;" }
            }
            h3 { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options",
                for option in question.options.iter().cloned() {
                    button {
                        key: "{option.index}",
                        class: option.tone.class(),
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| dispatch.call(QuizIntent::Select(option.index)),
                        "{option.text}"
                    }
                }
            }
            if let Some(feedback) = question.feedback.clone() {
                p { class: feedback_class(feedback.correct), "{feedback.message}" }
            }
            div { class: "quiz-actions",
                if locked {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Next),
                        "{question.next_label}"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !question.can_submit,
                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                        "Submit Answer"
                    }
                }
            }
        }
    }
}

fn feedback_class(correct: bool) -> &'static str {
    if correct {
        "quiz-feedback quiz-feedback--correct"
    } else {
        "quiz-feedback quiz-feedback--incorrect"
    }
}

#[component]
fn QuizSummary(result: QuizResultVm, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card quiz-summary",
            h3 { "Quiz Complete!" }
            p { class: "quiz-final-score", "Your score: {result.score_label}" }
            p { class: "quiz-verdict", "{result.verdict}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Restart),
                "Play Again"
            }
        }
    }
}
