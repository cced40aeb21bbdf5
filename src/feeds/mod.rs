pub mod arch;
pub mod recency;

pub use arch::{parse_feed, ArchNewsFetcher, FetchError, ARCH_NEWS_URL};
pub use recency::{filter_recent, DATE_FORMAT};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A single entry as it comes out of the parsed feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub link: Option<String>,
}

/// An entry that survived the recency filter, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    /// Formatted with [`DATE_FORMAT`].
    pub date: String,
    /// Empty when the entry had no link.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headlines {
    Items(Vec<Headline>),
    Errors(Vec<String>),
}

impl Headlines {
    pub fn is_empty(&self) -> bool {
        match self {
            Headlines::Items(items) => items.is_empty(),
            Headlines::Errors(errors) => errors.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSummary {
    pub count: usize,
    pub headlines: Headlines,
}

impl NewsSummary {
    pub fn from_headlines(headlines: Vec<Headline>) -> Self {
        Self {
            count: headlines.len(),
            headlines: Headlines::Items(headlines),
        }
    }

    /// A zero-count summary carrying one error line instead of headlines.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            count: 0,
            headlines: Headlines::Errors(vec![message.into()]),
        }
    }
}

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError>;
}

/// Fetch the feed and reduce it to the entries from the last `days` days.
///
/// Never fails: fetch and parse errors come back as a zero-count summary whose
/// only headline describes the failure.
pub async fn fetch_news<F>(fetcher: &F, days: u32, now: DateTime<Utc>) -> NewsSummary
where
    F: FeedFetcher + ?Sized,
{
    match fetcher.fetch().await {
        Ok(entries) => {
            tracing::debug!(entries = entries.len(), "feed parsed");
            let summary = filter_recent(entries, days, now);
            tracing::debug!(kept = summary.count, days, "recency filter applied");
            summary
        }
        Err(e) => {
            tracing::warn!(error = ?e, "failed to fetch news feed");
            NewsSummary::error(format!("Error: {:#}", anyhow::Error::new(e)))
        }
    }
}
