use bolig_scout::{pipeline, ChromeSession, Config, ContactedStore, TelegramNotifier};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🔍 Bolig Scout - Boligportal search & contact");
    info!("=============================================");

    // Failures are logged, never raised to the operator as an exit status.
    if let Err(e) = scout().await {
        error!("🚨 Unexpected error in run: {e:#}");
    }

    Ok(())
}

async fn scout() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let store = ContactedStore::new(config.store_path.clone());
    let notifier = TelegramNotifier::new(&config.telegram)?;
    let session = ChromeSession::launch()?;

    pipeline::run(&session, &store, &notifier, &config).await?;

    info!("✅ Scout run completed");
    Ok(())
}
