//! Void Intel Feed
//!
//! Fetches the aggregated threat-intelligence snapshot from the forum
//! service and renders it into the text block that flavors Lucy's
//! transmissions. The feed is contextual color only: every failure path
//! degrades to an empty string, never to an error the caller has to handle.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::{VendorConfig, SECRET_HEADER};

pub mod render;
pub mod snapshot;
pub mod voice;

pub use render::{render_feed, FEED_FOOTER, FEED_HEADER};
pub use snapshot::IntelSnapshot;
pub use voice::voice;

/// Hard abort window for the intel fetch. A slow feed must not stall the
/// whole transmission cycle.
const INTEL_TIMEOUT: Duration = Duration::from_secs(6);

/// Client for the intel feed endpoint.
pub struct IntelClient {
    config: VendorConfig,
    http: reqwest::Client,
}

impl IntelClient {
    pub fn new(config: VendorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and render the intel feed.
    ///
    /// Never fails: an unset secret, a timeout, a non-success status, or an
    /// unparseable payload all come back as an empty string. The composer
    /// tolerates an empty intel block.
    pub async fn fetch_feed(&self) -> String {
        if self.config.post_secret.is_empty() {
            return String::new();
        }

        match self.try_fetch().await {
            Ok(feed) => feed,
            Err(err) => {
                warn!("intel feed unavailable: {:#}", err);
                String::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<String> {
        let response = self
            .http
            .get(self.config.intel_url())
            .header(SECRET_HEADER, &self.config.post_secret)
            .timeout(INTEL_TIMEOUT)
            .send()
            .await
            .context("intel request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("intel endpoint returned {}", response.status());
        }

        let snapshot: IntelSnapshot = response
            .json()
            .await
            .context("failed to parse intel payload")?;

        Ok(render_feed(&snapshot))
    }
}
