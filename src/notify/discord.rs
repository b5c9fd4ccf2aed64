use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::{NotificationMessage, Notifier};
use crate::notify::format::SOURCE_NAME;

/// Avatar shown next to each webhook message.
const AVATAR_URL: &str =
    "https://a0.awsstatic.com/libra-css/images/logos/aws_logo_smile_1200x630.png";

#[derive(Clone)]
pub struct DiscordNotifier {
    webhook: String,
    thread_id: Option<String>,
    client: Client,
    timeout: Duration,
}

impl DiscordNotifier {
    pub fn new(webhook: String) -> Self {
        Self {
            webhook,
            thread_id: None,
            client: Client::new(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Route messages into a thread within the webhook's channel.
    pub fn with_thread_id(mut self, thread_id: Option<String>) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[async_trait::async_trait]
impl Notifier for DiscordNotifier {
    // Single attempt per message. Pacing and failure isolation are the
    // sequencer's job; a failed send is dropped for the run, not retried.
    async fn send(&self, msg: &NotificationMessage) -> Result<()> {
        let payload = DiscordWebhookPayload::embed(msg);

        let mut req = self
            .client
            .post(&self.webhook)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(id) = &self.thread_id {
            req = req.query(&[("thread_id", id.as_str())]);
        }

        let rsp = req.send().await.context("discord webhook request failed")?;
        let status = rsp.status();
        if !status.is_success() {
            let body = rsp.text().await.unwrap_or_default();
            return Err(anyhow!("discord webhook returned {status}: {body}"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct EmbedFooter {
    text: String,
}

#[derive(Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[derive(Serialize)]
struct DiscordEmbed {
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    footer: EmbedFooter,
    fields: Vec<EmbedField>,
}

#[derive(Serialize)]
struct DiscordWebhookPayload {
    username: String,
    avatar_url: String,
    embeds: Vec<DiscordEmbed>,
}

impl DiscordWebhookPayload {
    fn embed(msg: &NotificationMessage) -> Self {
        Self {
            username: SOURCE_NAME.to_string(),
            avatar_url: AVATAR_URL.to_string(),
            embeds: vec![DiscordEmbed {
                title: msg.title.clone(),
                description: msg.description.clone(),
                url: msg.url.clone(),
                color: msg.color,
                timestamp: msg.timestamp.clone(),
                footer: EmbedFooter {
                    text: msg.footer.clone(),
                },
                fields: vec![EmbedField {
                    name: "Published".to_string(),
                    value: msg.published_field.clone(),
                    inline: true,
                }],
            }],
        }
    }
}
