use dioxus::prelude::*;
use portal_core::model::ChatLog;

use crate::context::{AppContext, AuthState};
use crate::vm::map_chat_message;

/// Landing page with the welcome chatbot.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let chat = ctx.chat();
    let timings = ctx.timings();

    let log = use_signal(ChatLog::new);
    let mut draft = use_signal(String::new);
    let typing = use_signal(|| false);

    // Welcome messages arrive once per visit; the task dies with the view.
    let chat_for_welcome = chat.clone();
    use_hook(move || {
        let chat = chat_for_welcome.clone();
        let mut log = log;
        spawn(async move {
            tokio::time::sleep(timings.welcome_delay).await;
            chat.greet(&mut log.write());
            tokio::time::sleep(timings.second_welcome_delay).await;
            chat.hint(&mut log.write());
        })
    });

    let send = use_callback(move |()| {
        if typing() {
            return;
        }
        let text = draft();
        let chat = chat.clone();
        let mut log = log;
        let mut typing = typing;
        if !chat.send(&mut log.write(), &text) {
            return;
        }
        draft.set(String::new());
        typing.set(true);
        let signed_in = auth.is_signed_in();
        spawn(async move {
            tokio::time::sleep(timings.typing_delay).await;
            chat.respond(&mut log.write(), &text, signed_in);
            typing.set(false);
        });
    });

    let messages = log
        .read()
        .messages()
        .iter()
        .map(map_chat_message)
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page chat-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome to the Portal" }
                p { class: "view-subtitle", "Ask our assistant where to go next." }
            }
            div { class: "chat-window",
                div { class: "chat-messages",
                    for message in messages {
                        div { class: message.bubble_class(), key: "{message.id}",
                            div { class: "chat-meta",
                                span { class: "chat-sender", "{message.sender}" }
                                span { class: "chat-time", "{message.time}" }
                            }
                            p { class: "chat-content", "{message.content}" }
                        }
                    }
                    if typing() {
                        div { class: "chat-message chat-message--bot chat-typing",
                            span { class: "chat-typing-dot" }
                            span { class: "chat-typing-dot" }
                            span { class: "chat-typing-dot" }
                        }
                    }
                }
                div { class: "chat-input-row",
                    input {
                        class: "chat-input",
                        r#type: "text",
                        placeholder: "Type your message...",
                        value: "{draft}",
                        disabled: typing(),
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send.call(());
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: typing() || draft().trim().is_empty(),
                        onclick: move |_| send.call(()),
                        "Send"
                    }
                }
            }
        }
    }
}
