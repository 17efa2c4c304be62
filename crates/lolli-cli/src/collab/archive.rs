//! Site archiver collaborator

use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use tracing::{error, info};

/// Archives a website into a destination directory
#[async_trait]
pub trait SiteArchiver: Send + Sync {
    async fn archive(&self, url: &str, dest: &Path) -> anyhow::Result<()>;
}

/// Archiver backed by a plain HTTP fetch.
///
/// Saves the requested document only; recursive mirroring stays with the
/// external scraping capability.
#[derive(Default)]
pub struct HttpArchiver {
    client: reqwest::Client,
}

impl HttpArchiver {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteArchiver for HttpArchiver {
    async fn archive(&self, url: &str, dest: &Path) -> anyhow::Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetching {url}"))?
            .error_for_status()
            .with_context(|| format!("fetching {url}"))?;

        let body = response.bytes().await.context("reading response body")?;

        tokio::fs::create_dir_all(dest)
            .await
            .with_context(|| format!("creating {}", dest.display()))?;

        let target = dest.join("index.html");
        tokio::fs::write(&target, &body)
            .await
            .with_context(|| format!("writing {}", target.display()))?;

        info!(url, "Resource saved");
        info!("Website saved to {}", dest.display());
        Ok(())
    }
}

/// Invoke an archiver and report the outcome; errors are contained here.
pub async fn archive_and_report(archiver: &dyn SiteArchiver, url: &str, dest: &Path) {
    if let Err(err) = archiver.archive(url, dest).await {
        error!(url, error = %err, "An error occurred while archiving");
    }
}
