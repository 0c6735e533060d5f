//! VoidVendor Configuration
//!
//! Resolves the forum base URL and the shared posting secret once from the
//! environment into an immutable `VendorConfig`. Components receive the
//! config at construction instead of reading ambient state themselves, so
//! tests can substitute their own values.

use std::env;

/// Environment variable holding the forum base URL.
pub const FORUM_URL_ENV: &str = "VOIDVENDOR_FORUM_URL";

/// Environment variable holding the shared posting secret.
pub const POST_SECRET_ENV: &str = "LUCY_POST_SECRET";

/// Default forum base URL when the environment does not override it.
pub const DEFAULT_FORUM_URL: &str = "https://www.voidvendor.com";

/// Header carrying the shared secret on both the intel read and the post
/// write.
pub const SECRET_HEADER: &str = "X-Lucy-Secret";

/// Process-wide configuration for the transmission pipeline.
///
/// Read once at startup and treated as immutable afterwards.
#[derive(Clone, Debug)]
pub struct VendorConfig {
    /// Forum base URL, trailing slash stripped.
    pub forum_url: String,
    /// Shared secret authorizing both the intel read and the post write.
    /// Empty means the pipeline is disabled.
    pub post_secret: String,
}

impl VendorConfig {
    /// Build a config from explicit values. A single trailing slash on
    /// `forum_url` is stripped so endpoint paths can be appended directly.
    pub fn new(forum_url: impl Into<String>, post_secret: impl Into<String>) -> Self {
        let mut forum_url = forum_url.into();
        if forum_url.ends_with('/') {
            forum_url.pop();
        }
        Self {
            forum_url,
            post_secret: post_secret.into(),
        }
    }

    /// Resolve the config from the process environment. An unset or empty
    /// `VOIDVENDOR_FORUM_URL` falls back to the default; the secret has no
    /// default.
    pub fn from_env() -> Self {
        let forum_url = env::var(FORUM_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FORUM_URL.to_string());
        let post_secret = env::var(POST_SECRET_ENV).unwrap_or_default();
        Self::new(forum_url, post_secret)
    }

    /// Validation gate for the whole pipeline: both the forum URL and the
    /// secret must be non-empty before any network activity begins.
    pub fn is_configured(&self) -> bool {
        !self.forum_url.is_empty() && !self.post_secret.is_empty()
    }

    /// Full URL of the intel feed endpoint.
    pub fn intel_url(&self) -> String {
        format!("{}/api/lucy/intel", self.forum_url)
    }

    /// Full URL of the forum post endpoint.
    pub fn post_url(&self) -> String {
        format!("{}/api/lucy/post", self.forum_url)
    }
}
