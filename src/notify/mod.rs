pub mod discord;
pub mod format;
pub mod sequencer;

use anyhow::Result;

/// Bounded, per-item projection sent to the destination. Constructed and
/// discarded within one delivery call; nothing persists across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    /// RFC 3339 publish time, passed through for destination-side
    /// relative-time rendering.
    pub timestamp: Option<String>,
    pub color: u32,
    /// Human-readable publish time, fixed English rendering.
    pub published_field: String,
    /// Positional footer, e.g. `AWS What's New • 2/5`.
    pub footer: String,
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, msg: &NotificationMessage) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub title: String,
    pub reason: String,
}

/// One run's delivery outcome. A failed item is dropped for the run; it may
/// re-qualify in a later run only if its publish time is still inside that
/// run's window, which is not guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
