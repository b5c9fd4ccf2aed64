// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod freshness;
pub mod ingest;
pub mod limiter;
pub mod notify;
pub mod pipeline;
pub mod scheduler;

// ---- Re-exports for stable public API ----
pub use crate::config::Settings;
pub use crate::ingest::types::{FeedItem, FeedSource};
pub use crate::notify::{DeliveryReport, NotificationMessage, Notifier};
pub use crate::pipeline::{run_once, RunConfig, RunSummary};
