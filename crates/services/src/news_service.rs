use std::cmp::Reverse;
use std::sync::Arc;

use portal_core::model::{NewsItem, SourceUrl};
use storage::repository::NewsRepository;
use tracing::{debug, info};

use crate::error::NewsError;

/// Answer to a scrape request. Nothing is fetched; the feed keeps showing mock data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub url: SourceUrl,
    pub message: String,
}

#[derive(Clone)]
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
}

impl NewsService {
    #[must_use]
    pub fn new(news: Arc<dyn NewsRepository>) -> Self {
        Self { news }
    }

    /// Feed items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Storage` if the feed cannot be read.
    pub async fn latest(&self) -> Result<Vec<NewsItem>, NewsError> {
        let mut items = self.news.list_news().await?;
        items.sort_by_key(|item| Reverse((item.published_on, item.id)));
        debug!(items = items.len(), "news loaded");
        Ok(items)
    }

    /// Validate a source URL and report that scraping is unavailable.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Url` for a blank or non-http(s) address.
    pub fn scrape(&self, raw_url: &str) -> Result<ScrapeReport, NewsError> {
        let url = SourceUrl::parse(raw_url)?;
        info!(host = url.host(), "scrape requested");
        Ok(ScrapeReport {
            message: format!(
                "Scraping {} is not available yet. Showing mock news instead.",
                url.host()
            ),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use portal_core::model::{NewsId, SourceUrlError};
    use storage::repository::{InMemoryRepository, StorageError};

    struct FixedNews(Vec<NewsItem>);

    #[async_trait::async_trait]
    impl NewsRepository for FixedNews {
        async fn list_news(&self) -> Result<Vec<NewsItem>, StorageError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn latest_is_newest_first() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
        let repo = FixedNews(vec![
            NewsItem::new(NewsId::new(1), "old", "", "A", day(1)),
            NewsItem::new(NewsId::new(2), "new", "", "B", day(3)),
            NewsItem::new(NewsId::new(3), "mid", "", "C", day(2)),
        ]);
        let titles: Vec<_> = NewsService::new(Arc::new(repo))
            .latest()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[test]
    fn scrape_validates_then_reports_unavailable() {
        let service = NewsService::new(Arc::new(InMemoryRepository::new()));
        let report = service.scrape(" https://example.com/news ").unwrap();
        assert_eq!(report.url.host(), "example.com");
        assert!(report.message.contains("not available"));

        assert!(matches!(
            service.scrape(""),
            Err(NewsError::Url(SourceUrlError::Empty))
        ));
        assert!(matches!(
            service.scrape("example.com"),
            Err(NewsError::Url(SourceUrlError::Invalid(_)))
        ));
    }
}
