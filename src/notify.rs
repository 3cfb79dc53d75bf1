use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{info, warn};

use crate::config::TelegramConfig;

/// Push-notification sink for run results. Delivery is best-effort:
/// implementations retry internally and report the final outcome.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn notify(&self, text: &str) -> bool;
}

/// Telegram bot sink with bounded retry and constant backoff.
pub struct TelegramNotifier {
    client: Client,
    bot_token: String,
    chat_id: String,
    max_retries: usize,
    backoff: Duration,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            max_retries: 3,
            backoff: Duration::from_secs(2),
        })
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn notify(&self, text: &str) -> bool {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let body = json!({ "chat_id": self.chat_id, "text": text });

        for attempt in 1..=self.max_retries {
            match self.client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("✅ Telegram message sent");
                    return true;
                }
                Ok(response) => {
                    warn!(
                        "⚠️ Telegram API responded with {} (attempt {}/{})",
                        response.status(),
                        attempt,
                        self.max_retries
                    );
                }
                Err(e) => {
                    warn!(
                        "❌ Telegram request failed (attempt {}/{}): {e}",
                        attempt, self.max_retries
                    );
                }
            }
            if attempt < self.max_retries {
                tokio::time::sleep(self.backoff).await;
            }
        }

        warn!("🚨 Giving up on Telegram message after {} attempts", self.max_retries);
        false
    }
}
