//! Pure projection of feed items into bounded notification messages.

use chrono::{DateTime, Utc};

use super::NotificationMessage;
use crate::ingest::types::FeedItem;

pub const SOURCE_NAME: &str = "AWS What's New";
/// AWS brand orange.
pub const BRAND_COLOR: u32 = 0xFF9900;
pub const TITLE_MAX: usize = 256;
pub const DESCRIPTION_MAX: usize = 500;

const ELLIPSIS: &str = "...";
const NO_DESCRIPTION: &str = "No description provided.";

/// Cap at `max` characters. On overflow, three of those characters are
/// given to the ellipsis marker, so the output never exceeds `max`.
/// Char-based, not byte-based.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn render_published(ts: DateTime<Utc>) -> String {
    // Fixed English rendering, e.g. "Tue, 19 Aug 2025 17:30 UTC".
    ts.format("%a, %d %b %Y %H:%M UTC").to_string()
}

/// Deterministic and I/O-free. `index` is 1-based within the batch.
pub fn format_message(item: &FeedItem, index: usize, total: usize) -> NotificationMessage {
    NotificationMessage {
        title: truncate_chars(&item.title, TITLE_MAX),
        description: truncate_chars(
            item.snippet.as_deref().unwrap_or(NO_DESCRIPTION),
            DESCRIPTION_MAX,
        ),
        url: item.link.clone(),
        timestamp: item.published_at.map(|ts| ts.to_rfc3339()),
        color: BRAND_COLOR,
        published_field: item
            .published_at
            .map(render_published)
            .unwrap_or_else(|| "unknown".to_string()),
        footer: format!("{SOURCE_NAME} • {index}/{total}"),
    }
}
