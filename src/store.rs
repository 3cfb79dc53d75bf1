use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Durable set of already-contacted listing URLs, one per line.
///
/// The store exclusively owns its backing file: loads read the whole file
/// into a set, discoveries are appended, and the file is never rewritten.
/// Concurrent runs on the same file are not supported.
pub struct ContactedStore {
    path: PathBuf,
}

impl ContactedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the full contacted set. A missing file is an empty set.
    pub async fn load(&self) -> Result<HashSet<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashSet::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }

    /// Keep only candidates not yet in the store, record them durably, and
    /// return them. Recording happens before anyone acts on the result, so
    /// a crash later in the run cannot lead to a double message.
    pub async fn filter_new(&self, candidates: Vec<String>) -> Result<Vec<String>> {
        let contacted = self.load().await?;

        let mut seen = HashSet::new();
        let new_links: Vec<String> = candidates
            .into_iter()
            .filter(|url| !contacted.contains(url) && seen.insert(url.clone()))
            .collect();

        if new_links.is_empty() {
            debug!("No unseen listings to record");
            return Ok(new_links);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        for link in &new_links {
            file.write_all(format!("{link}\n").as_bytes()).await?;
        }
        file.flush().await?;

        info!("💾 Recorded {} new listings in {}", new_links.len(), self.path.display());
        Ok(new_links)
    }
}
