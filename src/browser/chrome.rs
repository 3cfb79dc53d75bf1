use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::info;

use crate::browser::session::Session;

/// How long click/fill wait for their target element to show up.
const ACTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Headless-Chrome-backed [`Session`]. One tab, owned for the whole run.
pub struct ChromeSession {
    // Kept alive for the lifetime of the tab.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    pub fn launch() -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab()?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

#[async_trait]
impl Session for ChromeSession {
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()> {
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .with_context(|| format!("Failed to navigate to {url}"))?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .with_context(|| format!("Timed out waiting for {selector}"))?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, ACTION_TIMEOUT)
            .with_context(|| format!("No element to click for {selector}"))?
            .click()?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, ACTION_TIMEOUT)
            .with_context(|| format!("No element to fill for {selector}"))?
            .click()?;
        self.tab.type_str(value)?;
        Ok(())
    }

    async fn content(&self) -> Result<String> {
        self.tab.get_content().context("Failed to read page HTML")
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
