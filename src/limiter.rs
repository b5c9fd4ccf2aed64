//! Batch cap for one run's deliveries.

use crate::ingest::types::FeedItem;

/// Cap a fresh set to at most `max` items. Pure prefix selection, no
/// reordering: the feed is assumed newest-first, which is a property of the
/// feed, not something verified here.
pub fn limit(items: Vec<FeedItem>, max: usize) -> (Vec<FeedItem>, bool) {
    let truncated = items.len() > max;
    let mut batch = items;
    batch.truncate(max);
    (batch, truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<FeedItem> {
        (0..n)
            .map(|i| FeedItem {
                title: format!("item-{i}"),
                link: None,
                snippet: None,
                published_at: None,
            })
            .collect()
    }

    #[test]
    fn returns_prefix_in_order() {
        let (batch, truncated) = limit(items(7), 5);
        assert!(truncated);
        assert_eq!(batch.len(), 5);
        let titles: Vec<_> = batch.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["item-0", "item-1", "item-2", "item-3", "item-4"]);
    }

    #[test]
    fn exact_max_is_not_truncated() {
        let (batch, truncated) = limit(items(5), 5);
        assert!(!truncated);
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn under_max_passes_through() {
        let (batch, truncated) = limit(items(2), 5);
        assert!(!truncated);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn empty_input_stays_empty() {
        let (batch, truncated) = limit(items(0), 5);
        assert!(!truncated);
        assert!(batch.is_empty());
    }
}
