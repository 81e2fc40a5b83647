use dioxus::prelude::*;
use services::Access;

use crate::context::{AppContext, ToastState};
use crate::views::guard::Protected;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_news_card, refresh_label};

#[derive(Clone, Debug, PartialEq, Eq)]
enum ScrapeState {
    Idle,
    Scraping,
    Done(String),
    Error(String),
}

#[component]
pub fn NewsView() -> Element {
    rsx! {
        Protected { access: Access::SignedIn, NewsPage {} }
    }
}

#[component]
fn NewsPage() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_context::<ToastState>();
    let timings = ctx.timings();
    let refresh_text = refresh_label(timings.news_refresh);

    let news_service = ctx.news();
    let news_resource = use_resource(move || {
        let news = news_service.clone();
        async move {
            let items = news.latest().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(items.iter().map(map_news_card).collect::<Vec<_>>())
        }
    });

    // Periodic refresh; dropped with the page.
    use_hook(move || {
        let mut news_resource = news_resource;
        spawn(async move {
            if timings.news_refresh.is_zero() {
                return;
            }
            loop {
                tokio::time::sleep(timings.news_refresh).await;
                news_resource.restart();
            }
        })
    });

    let mut url = use_signal(String::new);
    let scrape_state = use_signal(|| ScrapeState::Idle);

    let scrape_service = ctx.news();
    let scrape = use_callback(move |()| {
        if scrape_state() == ScrapeState::Scraping {
            return;
        }
        let news = scrape_service.clone();
        let raw = url();
        let mut scrape_state = scrape_state;
        let mut toasts = toasts;
        scrape_state.set(ScrapeState::Scraping);
        spawn(async move {
            tokio::time::sleep(timings.scrape_delay).await;
            match news.scrape(&raw) {
                Ok(report) => {
                    toasts.success(report.message.clone());
                    scrape_state.set(ScrapeState::Done(report.message));
                }
                Err(err) => {
                    let message = err.to_string();
                    toasts.error(message.clone());
                    scrape_state.set(ScrapeState::Error(message));
                }
            }
        });
    });

    let scraping = scrape_state() == ScrapeState::Scraping;
    let news_state = view_state_from_resource(&news_resource);

    rsx! {
        div { class: "page news-page",
            header { class: "view-header",
                h2 { class: "view-title", "Latest News" }
                p { class: "view-subtitle", "{refresh_text}" }
            }
            section { class: "scrape-card",
                h3 { "Scrape a news source" }
                div { class: "scrape-row",
                    input {
                        class: "form-input",
                        r#type: "url",
                        placeholder: "https://example.com/news",
                        value: "{url}",
                        disabled: scraping,
                        oninput: move |evt| url.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: scraping,
                        onclick: move |_| scrape.call(()),
                        if scraping { "Scraping…" } else { "Scrape" }
                    }
                }
                match scrape_state() {
                    ScrapeState::Done(message) => rsx! {
                        p { class: "scrape-status scrape-status--done", "{message}" }
                    },
                    ScrapeState::Error(message) => rsx! {
                        p { class: "form-error", "{message}" }
                    },
                    ScrapeState::Idle | ScrapeState::Scraping => rsx! {},
                }
            }
            div { class: "news-grid",
                match news_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "view-loading", "Loading news..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "view-error", "{err.message()}" }
                    },
                    ViewState::Ready(cards) => rsx! {
                        if cards.is_empty() {
                            p { class: "view-empty", "No news yet." }
                        }
                        for card in cards {
                            article { class: "news-card", key: "{card.id}",
                                h3 { class: "news-title", "{card.title}" }
                                p { class: "news-summary", "{card.summary}" }
                                p { class: "news-byline", "{card.byline}" }
                            }
                        }
                    },
                }
            }
        }
    }
}
