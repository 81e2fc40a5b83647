use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::ids::NewsId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceUrlError {
    #[error("please enter a URL")]
    Empty,

    #[error("not a valid http(s) URL: {0}")]
    Invalid(String),
}

/// An absolute `http`/`https` address a feed could be pulled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(Url);

impl SourceUrl {
    /// Parse a user-entered address after trimming it.
    ///
    /// # Errors
    ///
    /// Returns `SourceUrlError::Empty` for blank input and
    /// `SourceUrlError::Invalid` for anything that is not an http(s) URL with a host.
    pub fn parse(raw: &str) -> Result<Self, SourceUrlError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SourceUrlError::Empty);
        }
        let url = Url::parse(raw).map_err(|_| SourceUrlError::Invalid(raw.to_owned()))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(SourceUrlError::Invalid(raw.to_owned()));
        }
        Ok(Self(url))
    }

    #[must_use]
    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A single headline in the news feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub published_on: NaiveDate,
}

impl NewsItem {
    #[must_use]
    pub fn new(
        id: NewsId,
        title: impl Into<String>,
        summary: impl Into<String>,
        source: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            source: source.into(),
            published_on,
        }
    }

    /// "Source • Apr 21, 2025" byline.
    #[must_use]
    pub fn byline(&self) -> String {
        format!("{} • {}", self.source, self.published_on.format("%b %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byline_joins_source_and_date() {
        let item = NewsItem::new(
            NewsId::new(1),
            "Title",
            "Summary",
            "Tech News",
            NaiveDate::from_ymd_opt(2025, 4, 21).unwrap(),
        );
        assert_eq!(item.byline(), "Tech News • Apr 21, 2025");
    }

    #[test]
    fn source_url_accepts_http_and_https_only() {
        let url = SourceUrl::parse("  https://news.example.com/feed ").unwrap();
        assert_eq!(url.host(), "news.example.com");
        assert!(SourceUrl::parse("http://example.com").is_ok());

        assert_eq!(SourceUrl::parse("   "), Err(SourceUrlError::Empty));
        for raw in ["example.com", "ftp://example.com", "mailto:a@b.co", "https://"] {
            assert!(
                matches!(SourceUrl::parse(raw), Err(SourceUrlError::Invalid(_))),
                "{raw}"
            );
        }
    }
}
