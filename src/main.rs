//! AWS What's New notifier — Binary Entrypoint
//! Boots the polling loop, or a single manual run with `--once`.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aws_whatsnew_notifier::config::Settings;
use aws_whatsnew_notifier::scheduler;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env()?;
    tracing::info!(
        feed = %settings.feed_url,
        interval_secs = settings.poll_interval.as_secs(),
        window_secs = settings.freshness_window.as_secs(),
        max_items = settings.max_items,
        "starting aws-whatsnew-notifier"
    );

    if std::env::args().any(|a| a == "--once") {
        let summary = scheduler::run_manual(&settings).await;
        tracing::info!(
            fetch_ok = summary.fetch_ok,
            fetched = summary.fetched,
            fresh = summary.fresh,
            sent = summary.delivery.succeeded,
            failed = summary.delivery.failed(),
            "manual run complete"
        );
        return Ok(());
    }

    scheduler::spawn_poll_loop(settings).await?;
    Ok(())
}
