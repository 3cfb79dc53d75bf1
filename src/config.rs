use std::path::PathBuf;

use anyhow::{Context, Result};

/// Boligportal account used for the login step.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Telegram bot settings for the notification sink.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// All tunables for a run, passed into each component at construction.
/// Nothing reads these as ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site origin, prefixed onto every relative listing href.
    pub base_url: String,
    /// URL-encoded location segment of the search path (e.g. "k%C3%B8benhavn").
    pub location: String,
    /// Monthly rent ceiling in DKK; listings at or above are dropped.
    pub max_price: i64,
    /// Minimum number of rooms, baked into the search path.
    pub min_rooms: u32,
    /// How many listings' worth of pagination to request before stopping.
    pub page_budget: usize,
    /// Canned inquiry message sent to each new listing.
    pub message_template: String,
    /// Newline-delimited file of already-contacted listing URLs.
    pub store_path: PathBuf,
    pub credentials: Credentials,
    pub telegram: TelegramConfig,
}

impl Config {
    /// Load credentials and Telegram settings from the environment
    /// (`credentials.env` is read first if present), with defaults for
    /// the search tunables.
    pub fn from_env() -> Result<Self> {
        // A missing credentials.env is fine; plain env vars still work.
        let _ = dotenvy::from_filename("credentials.env");

        let credentials = Credentials {
            email: std::env::var("BOLIGPORTAL_EMAIL")
                .context("BOLIGPORTAL_EMAIL is not set")?,
            password: std::env::var("BOLIGPORTAL_PASSWORD")
                .context("BOLIGPORTAL_PASSWORD is not set")?,
        };
        let telegram = TelegramConfig {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN is not set")?,
            chat_id: std::env::var("TELEGRAM_CHAT_ID")
                .context("TELEGRAM_CHAT_ID is not set")?,
        };

        Ok(Self {
            base_url: "https://www.boligportal.dk".to_string(),
            location: "k%C3%B8benhavn".to_string(),
            max_price: 30_000,
            min_rooms: 5,
            page_budget: 18,
            message_template:
                "Hello, I'm interested in this listing. Is it still available?".to_string(),
            store_path: PathBuf::from("visited_links.txt"),
            credentials,
            telegram,
        })
    }

    /// Search results URL for a given pagination offset.
    pub fn search_url(&self, offset: usize) -> String {
        format!(
            "{}/lejeboliger/{}/{}+-v%C3%A6relser/?max_monthly_rent={}&offset={}",
            self.base_url, self.location, self.min_rooms, self.max_price, offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            base_url: "https://www.boligportal.dk".to_string(),
            location: "k%C3%B8benhavn".to_string(),
            max_price: 30_000,
            min_rooms: 5,
            page_budget: 18,
            message_template: "Hello".to_string(),
            store_path: PathBuf::from("visited_links.txt"),
            credentials: Credentials {
                email: "user@example.com".to_string(),
                password: "secret".to_string(),
            },
            telegram: TelegramConfig {
                bot_token: "token".to_string(),
                chat_id: "chat".to_string(),
            },
        }
    }

    #[test]
    fn search_url_carries_filters_and_offset() {
        let config = test_config();
        assert_eq!(
            config.search_url(36),
            "https://www.boligportal.dk/lejeboliger/k%C3%B8benhavn/5+-v%C3%A6relser/?max_monthly_rent=30000&offset=36"
        );
    }

    #[test]
    fn search_url_starts_at_zero_offset() {
        let config = test_config();
        assert!(config.search_url(0).ends_with("&offset=0"));
    }
}
