//! Time-window freshness decisions.
//!
//! There is no persisted history: "new" is re-derived every run from
//! wall-clock time. The cutoff is computed exactly once per run so every
//! item in the run is judged against the same boundary.

use chrono::{DateTime, Duration, Utc};
use metrics::counter;

use crate::ingest::types::FeedItem;

/// Outcome of judging one item, reportable for every input, not just
/// survivors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessDecision {
    pub fresh: bool,
    /// Age relative to `now`; `None` when the item has no parsable
    /// publish time.
    pub age_secs: Option<i64>,
}

pub fn judge(item: &FeedItem, cutoff: DateTime<Utc>, now: DateTime<Utc>) -> FreshnessDecision {
    match item.published_at {
        // Inclusive lower bound: published exactly at the cutoff qualifies.
        Some(ts) => FreshnessDecision {
            fresh: ts >= cutoff,
            age_secs: Some((now - ts).num_seconds()),
        },
        // Fail-closed policy: an unparsable publish time never qualifies,
        // so a malformed timestamp cannot cause a spurious delivery.
        None => FreshnessDecision {
            fresh: false,
            age_secs: None,
        },
    }
}

/// Keep the items published within the trailing `window` ending at `now`,
/// preserving input order.
pub fn filter_fresh(items: Vec<FeedItem>, now: DateTime<Utc>, window: Duration) -> Vec<FeedItem> {
    let cutoff = now - window;
    let mut fresh = Vec::with_capacity(items.len());

    for item in items {
        let d = judge(&item, cutoff, now);
        tracing::debug!(
            title = %item.title,
            age_secs = ?d.age_secs,
            fresh = d.fresh,
            "freshness decision"
        );
        if d.fresh {
            counter!("freshness_fresh_total").increment(1);
            fresh.push(item);
        } else {
            counter!("freshness_stale_total").increment(1);
        }
    }

    fresh
}
