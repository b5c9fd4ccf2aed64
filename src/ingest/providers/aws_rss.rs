use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::ingest::types::{FeedItem, FeedSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

/// RFC 2822 `pubDate` to UTC. `None` on any parse failure; the freshness
/// filter excludes such items rather than guessing a time.
fn parse_rfc2822_utc(ts: &str) -> Option<DateTime<Utc>> {
    let dt = OffsetDateTime::parse(ts, &Rfc2822).ok()?;
    let unix = dt.to_offset(UtcOffset::UTC).unix_timestamp();
    Utc.timestamp_opt(unix, 0).single()
}

pub struct AwsRssProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl AwsRssProvider {
    /// Parse from an in-memory XML document. Used by tests.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                url: url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<FeedItem>> {
        let t0 = std::time::Instant::now();
        let rss: Rss = from_str(s).context("parsing aws what's new rss xml")?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let title = crate::ingest::normalize_snippet(it.title.as_deref().unwrap_or_default());
            if title.is_empty() {
                continue;
            }

            let snippet = it
                .description
                .as_deref()
                .map(crate::ingest::normalize_snippet)
                .filter(|s| !s.is_empty());

            out.push(FeedItem {
                title,
                link: it.link,
                snippet,
                published_at: it.pub_date.as_deref().and_then(parse_rfc2822_utc),
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("feed_parse_ms").record(ms);
        counter!("feed_items_total").increment(out.len() as u64);
        Ok(out)
    }
}

#[async_trait]
impl FeedSource for AwsRssProvider {
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),

            Mode::Http { url, client } => {
                let body = client
                    .get(url)
                    .send()
                    .await
                    .context("aws feed http get()")?
                    .error_for_status()
                    .context("aws feed http status")?
                    .text()
                    .await
                    .context("aws feed http .text()")?;
                Self::parse_items_from_str(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "aws-whats-new"
    }
}
