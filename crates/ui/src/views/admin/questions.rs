use dioxus::prelude::*;
use portal_core::model::{Question, QuestionDraft, QuestionId};

use crate::context::{AppContext, ToastState};
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub(super) fn QuestionsTab() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<ToastState>();
    let mut editing = use_signal(|| None::<QuestionDraft>);
    let mut confirm_delete = use_signal(|| None::<Question>);

    let bank = ctx.question_bank();
    let resource = use_resource(move || {
        let bank = bank.clone();
        async move {
            let questions = bank
                .list_questions()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(questions)
        }
    });

    let bank_for_save = ctx.question_bank();
    let save = use_callback(move |draft: QuestionDraft| {
        let bank = bank_for_save.clone();
        let mut resource = resource;
        let mut editing = editing;
        let mut toasts = toasts;
        spawn(async move {
            match bank.save(draft).await {
                Ok(_) => {
                    editing.set(None);
                    toasts.success("Question saved.");
                    resource.restart();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let bank_for_delete = ctx.question_bank();
    let delete = use_callback(move |id: QuestionId| {
        let bank = bank_for_delete.clone();
        let mut resource = resource;
        let mut confirm_delete = confirm_delete;
        let mut toasts = toasts;
        spawn(async move {
            confirm_delete.set(None);
            match bank.delete(&id).await {
                Ok(()) => {
                    toasts.success("Question deleted.");
                    resource.restart();
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let bank_for_new = ctx.question_bank();
    let questions = match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => {
            return rsx! {
                p { class: "view-loading", "Loading questions..." }
            };
        }
        ViewState::Error(err) => {
            return rsx! {
                p { class: "view-error", "{err.message()}" }
            };
        }
        ViewState::Ready(questions) => questions,
    };

    rsx! {
        section { class: "admin-section",
            div { class: "admin-toolbar",
                span { class: "admin-count", "{questions.len()} questions" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| editing.set(Some(bank_for_new.new_draft())),
                    "Add Question"
                }
            }
            ul { class: "question-list",
                for question in questions {
                    QuestionRow {
                        key: "{question.id()}",
                        question: question.clone(),
                        on_edit: move |question: Question| {
                            editing.set(Some(QuestionDraft::from_question(&question)));
                        },
                        on_delete: move |question: Question| confirm_delete.set(Some(question)),
                    }
                }
            }
            if let Some(draft) = editing() {
                QuestionEditor {
                    draft,
                    on_save: save,
                    on_cancel: move |()| editing.set(None),
                }
            }
            if let Some(question) = confirm_delete() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Delete question" }
                        p { "Delete \"{question.prompt()}\"? This cannot be undone." }
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
                                        delete.call(target.id().clone());
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
fn QuestionRow(
    question: Question,
    on_edit: EventHandler<Question>,
    on_delete: EventHandler<Question>,
) -> Element {
    let for_edit = question.clone();
    let for_delete = question.clone();
    rsx! {
        li { class: "question-row",
            div { class: "question-row-text",
                p { class: "question-prompt", "{question.prompt()}" }
                p { class: "question-answer",
                    "Answer: {question.correct_text()} ({question.options().len()} options)"
                }
            }
            div { class: "admin-actions",
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}

/// Modal editor over a `QuestionDraft`; the option buttons follow the draft limits.
#[component]
fn QuestionEditor(
    draft: QuestionDraft,
    on_save: Callback<QuestionDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| draft.clone());
    let mut error = use_signal(|| None::<String>);
    let current = form();
    let can_add = current.can_add_option();
    let can_remove = current.can_remove_option();

    let submit = move |_: MouseEvent| {
        let draft = form();
        match draft.clone().validate() {
            Ok(_) => {
                error.set(None);
                on_save.call(draft);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal modal--wide", role: "dialog",
                h3 { "Edit question" }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "form-label", r#for: "question-prompt", "Question" }
                textarea {
                    id: "question-prompt",
                    class: "form-input",
                    rows: "2",
                    value: "{current.prompt}",
                    oninput: move |evt| form.write().set_prompt(evt.value()),
                }
                p { class: "form-label", "Options (select the correct answer)" }
                for (index, text) in current.options.iter().cloned().enumerate() {
                    div { class: "option-row", key: "{index}",
                        input {
                            r#type: "radio",
                            name: "correct-option",
                            checked: current.correct == index,
                            onchange: move |_| form.write().set_correct(index),
                        }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Option {index + 1}",
                            value: "{text}",
                            oninput: move |evt| form.write().set_option(index, evt.value()),
                        }
                        button {
                            class: "btn btn-small btn-secondary",
                            r#type: "button",
                            disabled: !can_remove,
                            onclick: move |_| {
                                if let Err(err) = form.write().remove_option(index) {
                                    error.set(Some(err.to_string()));
                                }
                            },
                            "Remove"
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !can_add,
                    onclick: move |_| {
                        if let Err(err) = form.write().add_option() {
                            error.set(Some(err.to_string()));
                        }
                    },
                    "Add Option"
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
                        onclick: submit,
                        "Save Question"
                    }
                }
            }
        }
    }
}
