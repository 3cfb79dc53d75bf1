use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::browser::Session;
use crate::config::Credentials;

const LOGIN_LINK: &str = "a.css-7334qx";
const EMAIL_FIELD: &str = "#__TextField21";
const PASSWORD_FIELD: &str = "#__TextField23";
const SUBMIT_BUTTON: &str = r#"button[data-test-id="loginSubmit"]"#;

const LOGIN_WAIT: Duration = Duration::from_secs(5);
const SETTLE: Duration = Duration::from_secs(2);

/// One-shot login, single attempt, best-effort. The site allows guest use
/// of the contact form, so a failed login only gets logged and the run
/// carries on unauthenticated.
pub async fn log_in(session: &dyn Session, credentials: &Credentials) {
    match try_log_in(session, credentials).await {
        Ok(()) => info!("✅ Logged in as {}", credentials.email),
        Err(e) => warn!("Login failed, continuing unauthenticated: {e:#}"),
    }
}

async fn try_log_in(session: &dyn Session, credentials: &Credentials) -> Result<()> {
    session.wait_for_selector(LOGIN_LINK, LOGIN_WAIT).await?;
    session.click(LOGIN_LINK).await?;

    session.fill(EMAIL_FIELD, &credentials.email).await?;
    session.fill(PASSWORD_FIELD, &credentials.password).await?;

    session.click(SUBMIT_BUTTON).await?;
    tokio::time::sleep(SETTLE).await;
    Ok(())
}
