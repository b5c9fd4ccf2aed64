// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};

/// One announcement as parsed from the feed, immutable once fetched.
/// `published_at` is `None` when the source timestamp was missing or
/// unparsable; the freshness filter treats that as "never qualifies".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>>;
    fn name(&self) -> &'static str;
}
