use super::{FeedEntry, FeedFetcher};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub const ARCH_NEWS_URL: &str = "https://archlinux.org/feeds/news/";
const USER_AGENT: &str = "Waybar-ArchNews/1.0";

/// Why the feed could not be turned into entries.
///
/// `Http` keeps reqwest's cause chain. `Parse` keeps the parser error for
/// logging only, so its message stays fixed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("HTTP error {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse RSS feed")]
    Parse(feed_rs::parser::ParseFeedError),
}

/// Fetches the Arch Linux news feed over HTTPS.
pub struct ArchNewsFetcher {
    client: reqwest::Client,
}

impl ArchNewsFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for ArchNewsFetcher {
    async fn fetch(&self) -> Result<Vec<FeedEntry>, FetchError> {
        tracing::debug!(url = ARCH_NEWS_URL, "requesting news feed");
        let response = self.client.get(ARCH_NEWS_URL).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }
}

/// Parse an RSS or Atom document into feed entries.
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>, FetchError> {
    let feed = feed_rs::parser::parse(body).map_err(FetchError::Parse)?;

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| FeedEntry {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            published: entry.published,
            updated: entry.updated,
            link: entry.links.into_iter().next().map(|l| l.href),
        })
        .collect();

    Ok(entries)
}
