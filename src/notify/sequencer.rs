//! Ordered, paced delivery with per-item failure isolation.

use metrics::counter;
use std::time::Duration;

use super::{DeliveryFailure, DeliveryReport, Notifier};
use crate::ingest::types::FeedItem;
use crate::notify::format::format_message;

/// Send one formatted message per batch item, strictly in feed order and one
/// at a time. `pace` elapses between consecutive sends only: no delay before
/// the first item or after the last. A failed send is recorded and logged
/// with its diagnostic detail but never aborts the rest of the batch, and
/// nothing is retried within a run.
pub async fn deliver_batch(
    notifier: &dyn Notifier,
    batch: &[FeedItem],
    pace: Duration,
) -> DeliveryReport {
    let total = batch.len();
    let mut report = DeliveryReport::default();

    for (i, item) in batch.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(pace).await;
        }

        let msg = format_message(item, i + 1, total);
        report.attempted += 1;

        match notifier.send(&msg).await {
            Ok(()) => {
                report.succeeded += 1;
                counter!("notify_sent_total").increment(1);
                tracing::info!(
                    title = %item.title,
                    position = i + 1,
                    total,
                    "notification delivered"
                );
            }
            Err(e) => {
                counter!("notify_failed_total").increment(1);
                tracing::warn!(
                    error = ?e,
                    title = %item.title,
                    link = ?item.link,
                    position = i + 1,
                    total,
                    "notification delivery failed"
                );
                report.failures.push(DeliveryFailure {
                    title: item.title.clone(),
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    report
}
