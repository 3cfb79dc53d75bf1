use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

/// Capability surface the pipeline needs from a browser page.
///
/// Keeping the selector-keyed interaction behind this trait lets the
/// extraction and dispatch logic run against a scripted fake in tests,
/// without a real browser.
#[async_trait]
pub trait Session: Send + Sync {
    /// Drive the page to `url`, bounded by `timeout`.
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Block until `selector` matches an element, or time out.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Click the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Focus the first element matching `selector` and type `value` into it.
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Full HTML of the current page.
    async fn content(&self) -> Result<String>;

    /// URL the page currently sits on, after any redirects.
    async fn current_url(&self) -> Result<String>;
}
