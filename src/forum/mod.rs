//! Forum Client
//!
//! Submits a composed transmission to the forum's ingestion endpoint,
//! authorized by the shared secret header. One attempt per call, no
//! retries, and no idempotency: publishing the same transmission twice
//! creates two posts.

use chrono::Utc;
use serde_json::json;

use crate::config::{VendorConfig, SECRET_HEADER};
use crate::types::PublishResult;

/// Category tag attached to every transmission.
pub const POST_CATEGORY: &str = "lore";

/// Client for the forum post endpoint.
pub struct ForumClient {
    config: VendorConfig,
    http: reqwest::Client,
}

impl ForumClient {
    pub fn new(config: VendorConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Publish one transmission and classify the outcome.
    ///
    /// 2xx becomes `Published`, any other status `Rejected` with the
    /// response body captured for diagnostics, and a transport error
    /// `NetworkFailure`. No timeout beyond the transport's own defaults.
    pub async fn publish(&self, title: &str, body: &str) -> PublishResult {
        let payload = json!({
            "title": title,
            "content": body,
            "category": POST_CATEGORY,
        });

        let response = match self
            .http
            .post(self.config.post_url())
            .header("Content-Type", "application/json")
            .header(SECRET_HEADER, &self.config.post_secret)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return PublishResult::NetworkFailure(err),
        };

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return PublishResult::Rejected {
                status: status.as_u16(),
                body: body_text,
            };
        }

        PublishResult::Published {
            title: title.to_string(),
            posted_at: Utc::now().to_rfc3339(),
        }
    }
}
