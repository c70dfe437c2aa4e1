//! Discord webhook delivery.

use std::time::Duration;

use tracing::{debug, error, info, instrument};

use super::format::WebhookMessage;
use crate::config::Config;
use crate::error::NotifyError;
use crate::metrics;

/// Posts report messages to a Discord webhook.
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl DiscordNotifier {
    /// Create a notifier with an explicit URL.
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Create a notifier from config. Requires `DISCORD_WEBHOOK_URL`.
    pub fn from_config(config: &Config) -> Result<Self, NotifyError> {
        let url = config
            .discord_webhook_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or(NotifyError::MissingWebhook)?;

        info!("Discord notifications enabled");
        Self::new(url, Duration::from_millis(config.http_timeout_ms))
    }

    /// Post a message. Any 2xx status counts as delivered.
    #[instrument(skip_all)]
    pub async fn post(&self, message: &WebhookMessage) -> Result<(), NotifyError> {
        metrics::inc_webhook_posts();

        let resp = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .inspect_err(|e| {
                metrics::inc_webhook_failures();
                error!("Webhook request failed: {}", e);
            })?;

        let status = resp.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Webhook message delivered");
            return Ok(());
        }

        metrics::inc_webhook_failures();
        let body = resp.text().await.unwrap_or_default();
        error!("Webhook rejected message: {} - {}", status, body);
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
