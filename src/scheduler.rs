// src/scheduler.rs
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::ingest::providers::aws_rss::AwsRssProvider;
use crate::notify::discord::DiscordNotifier;
use crate::pipeline::{self, RunConfig, RunSummary};

fn wire(settings: &Settings) -> (AwsRssProvider, DiscordNotifier, RunConfig) {
    let source = AwsRssProvider::from_url(settings.feed_url.clone());
    let notifier = DiscordNotifier::new(settings.webhook_url.clone())
        .with_thread_id(settings.thread_id.clone());
    (source, notifier, RunConfig::from(settings))
}

/// Spawn the polling loop: one pipeline run per interval tick. Runs are
/// sequential within the task; an unreliable host scheduler, not this loop,
/// is the only way two runs could ever overlap.
pub fn spawn_poll_loop(settings: Settings) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (source, notifier, cfg) = wire(&settings);

        let mut ticker = tokio::time::interval(settings.poll_interval);
        loop {
            ticker.tick().await;
            let summary = pipeline::run_once(&source, &notifier, &cfg).await;
            tracing::info!(
                target: "poll",
                fetch_ok = summary.fetch_ok,
                fetched = summary.fetched,
                fresh = summary.fresh,
                truncated = summary.truncated,
                sent = summary.delivery.succeeded,
                failed = summary.delivery.failed(),
                "poll tick"
            );
        }
    })
}

/// One manual run with the same wiring as the loop.
pub async fn run_manual(settings: &Settings) -> RunSummary {
    let (source, notifier, cfg) = wire(settings);
    pipeline::run_once(&source, &notifier, &cfg).await
}
