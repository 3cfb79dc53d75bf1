pub mod contact;
pub mod extract;
pub mod login;
pub mod navigation;
pub mod popups;

pub use contact::ContactDispatcher;
pub use extract::ListingExtractor;
pub use navigation::NavigationGuard;

use anyhow::Result;
use tracing::info;

use crate::browser::Session;
use crate::config::Config;
use crate::models::RunSummary;
use crate::notify::Notify;
use crate::store::ContactedStore;

/// One full run: extract, dedup, log in, contact, notify. Single
/// sequential flow over one browser session; only stage failures the
/// design treats as fatal escape as errors.
pub async fn run(
    session: &dyn Session,
    store: &ContactedStore,
    notifier: &dyn Notify,
    config: &Config,
) -> Result<()> {
    let guard = NavigationGuard::default();

    guard.goto(session, &config.search_url(0)).await;
    popups::dismiss_popups(session).await;

    let extractor = ListingExtractor::new(config);
    let candidates = extractor.extract(session, &guard).await;
    // Overlays tend to come back after paginating.
    popups::dismiss_popups(session).await;

    let new_listings = store.filter_new(candidates).await?;
    info!("🔍 {} new listings after dedup", new_listings.len());

    login::log_in(session, &config.credentials).await;

    let dispatcher = ContactDispatcher::default();
    dispatcher
        .send_messages(session, &guard, &new_listings, &config.message_template)
        .await;

    let summary = RunSummary::new(new_listings);
    for line in summary.lines() {
        notifier.notify(&line).await;
    }

    Ok(())
}
