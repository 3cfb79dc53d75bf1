use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use crate::browser::Session;
use crate::pipeline::navigation::NavigationGuard;

pub const CONTACT_BUTTON: &str = "button.temporaryButtonClassname.css-1ly3ldq";
pub const MESSAGE_FIELD: &str = "#__TextField1";
pub const SEND_BUTTON: &str = r#"button[type="submit"]"#;

/// Substring of the page URL after opening the contact panel that signals
/// an existing conversation thread ("indbakke" = inbox).
const INBOX_MARKER: &str = "indbakke";

/// Sends the inquiry template to each new listing, strictly in the order
/// supplied, skipping listings the site already has a thread for.
pub struct ContactDispatcher {
    /// Wait for the contact affordance to appear.
    pub wait: Duration,
    /// Grace period for the inbox redirect after opening the panel.
    pub settle: Duration,
}

impl Default for ContactDispatcher {
    fn default() -> Self {
        Self {
            wait: Duration::from_secs(5),
            settle: Duration::from_secs(2),
        }
    }
}

impl ContactDispatcher {
    /// Each listing's attempt is isolated; a failure is logged and the
    /// loop moves on to the next listing.
    pub async fn send_messages(
        &self,
        session: &dyn Session,
        guard: &NavigationGuard,
        listings: &[String],
        template: &str,
    ) {
        for listing in listings {
            if let Err(e) = self.contact_one(session, guard, listing, template).await {
                error!("❌ Contact attempt failed for {listing}: {e:#}");
            }
        }
    }

    async fn contact_one(
        &self,
        session: &dyn Session,
        guard: &NavigationGuard,
        listing: &str,
        template: &str,
    ) -> Result<()> {
        guard.goto(session, listing).await;

        session.wait_for_selector(CONTACT_BUTTON, self.wait).await?;
        session.click(CONTACT_BUTTON).await?;

        // The site redirects straight to the inbox when a conversation
        // already exists; give it a moment before reading the URL.
        tokio::time::sleep(self.settle).await;
        let current_url = session.current_url().await?;
        if current_url.contains(INBOX_MARKER) {
            info!("✅ Already messaged {listing}, skipping");
            return Ok(());
        }

        session.fill(MESSAGE_FIELD, template).await?;
        session.click(SEND_BUTTON).await?;
        info!("📨 Sent inquiry to {listing}");
        Ok(())
    }
}
