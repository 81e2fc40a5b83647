use std::time::Duration;

use portal_core::model::NewsItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsCardVm {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub byline: String,
}

#[must_use]
pub fn map_news_card(item: &NewsItem) -> NewsCardVm {
    NewsCardVm {
        id: item.id.value(),
        title: item.title.clone(),
        summary: item.summary.clone(),
        byline: item.byline(),
    }
}

/// Subtitle describing how often the headline list reloads.
#[must_use]
pub fn refresh_label(interval: Duration) -> String {
    let secs = interval.as_secs().max(1);
    match secs {
        60 => "Headlines refresh every minute.".to_string(),
        s if s % 3600 == 0 => match s / 3600 {
            1 => "Headlines refresh every hour.".to_string(),
            h => format!("Headlines refresh every {h} hours."),
        },
        s if s % 60 == 0 => format!("Headlines refresh every {} minutes.", s / 60),
        1 => "Headlines refresh every second.".to_string(),
        s => format!("Headlines refresh every {s} seconds."),
    }
}
