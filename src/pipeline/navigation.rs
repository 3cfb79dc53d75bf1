use std::time::Duration;

use tracing::{debug, error, warn};

use crate::browser::Session;

/// Wraps page transitions in bounded retry with constant backoff.
///
/// Navigation failure is non-fatal: callers get `false` and continue
/// with whatever page state they have.
pub struct NavigationGuard {
    pub max_retries: usize,
    pub backoff: Duration,
    pub timeout: Duration,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
        }
    }
}

impl NavigationGuard {
    pub async fn goto(&self, session: &dyn Session, url: &str) -> bool {
        for attempt in 1..=self.max_retries {
            match session.navigate(url, self.timeout).await {
                Ok(()) => {
                    debug!("✅ Navigated to {url}");
                    return true;
                }
                Err(e) => {
                    warn!(
                        "⚠️ Error navigating to {url} (attempt {attempt}/{}): {e:#}",
                        self.max_retries
                    );
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.backoff).await;
                    }
                }
            }
        }
        error!("🚨 Failed to navigate to {url} after {} attempts", self.max_retries);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Fails the first `failures` navigations, then succeeds.
    struct FlakySession {
        failures: usize,
        attempts: Mutex<usize>,
    }

    impl FlakySession {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                attempts: Mutex::new(0),
            }
        }

        fn attempts(&self) -> usize {
            *self.attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl Session for FlakySession {
        async fn navigate(&self, _url: &str, _timeout: Duration) -> Result<()> {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            if *attempts <= self.failures {
                bail!("net::ERR_TIMED_OUT");
            }
            Ok(())
        }

        async fn wait_for_selector(&self, _selector: &str, _timeout: Duration) -> Result<()> {
            Ok(())
        }
        async fn click(&self, _selector: &str) -> Result<()> {
            Ok(())
        }
        async fn fill(&self, _selector: &str, _value: &str) -> Result<()> {
            Ok(())
        }
        async fn content(&self) -> Result<String> {
            Ok(String::new())
        }
        async fn current_url(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    fn guard() -> NavigationGuard {
        NavigationGuard {
            max_retries: 3,
            backoff: Duration::ZERO,
            timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn first_attempt_success_navigates_once() {
        let session = FlakySession::new(0);
        assert!(guard().goto(&session, "https://example.com").await);
        assert_eq!(session.attempts(), 1);
    }

    #[tokio::test]
    async fn recovers_within_retry_budget() {
        let session = FlakySession::new(2);
        assert!(guard().goto(&session, "https://example.com").await);
        assert_eq!(session.attempts(), 3);
    }

    #[tokio::test]
    async fn never_exceeds_max_retries() {
        let session = FlakySession::new(usize::MAX);
        assert!(!guard().goto(&session, "https://example.com").await);
        assert_eq!(session.attempts(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_constant_backoff_between_attempts() {
        let session = FlakySession::new(usize::MAX);
        let guard = NavigationGuard {
            max_retries: 3,
            backoff: Duration::from_secs(2),
            timeout: Duration::from_secs(10),
        };
        let started = tokio::time::Instant::now();
        guard.goto(&session, "https://example.com").await;
        // Two backoffs, none after the final attempt.
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }
}
