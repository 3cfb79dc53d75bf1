use std::time::Duration;

use tracing::{debug, info};

use crate::browser::Session;

/// Overlay-dismiss buttons seen on the site, in the order worth trying.
const POPUP_SELECTORS: [&str; 2] = ["#declineButton", "button.css-176et4n"];

const POPUP_WAIT: Duration = Duration::from_secs(3);
const SETTLE: Duration = Duration::from_secs(1);

/// Best-effort removal of interstitial overlays that block interaction.
/// Tries each known selector; the first one that appears gets clicked.
/// None appearing is a normal outcome, never an error.
pub async fn dismiss_popups(session: &dyn Session) -> bool {
    for selector in POPUP_SELECTORS {
        if session.wait_for_selector(selector, POPUP_WAIT).await.is_err() {
            debug!("No popup matching {selector}");
            continue;
        }
        info!("✅ Found popup button: {selector}");
        if let Err(e) = session.click(selector).await {
            debug!("Popup button {selector} vanished before click: {e:#}");
            continue;
        }
        // Let the UI transition finish before anything else touches the page.
        tokio::time::sleep(SETTLE).await;
        info!("✅ Popup closed");
        return true;
    }
    debug!("No popup button found");
    false
}
