//! POST_TO_VOID_FORUM Action
//!
//! The full transmission cycle: fetch the intel feed, compose a
//! transmission through the generation collaborator, and publish it to the
//! forum. Each cycle is one sequential chain with no internal parallelism;
//! every failure is terminal for that invocation and reported to the host
//! through a short status string.

use std::sync::Arc;

use tracing::{error, info};

use crate::compose::{ComposeState, TransmissionComposer};
use crate::config::VendorConfig;
use crate::forum::ForumClient;
use crate::intel::IntelClient;
use crate::types::{ComposeError, GenerationClient, PublishResult};

/// Action name as the host routes it.
pub const ACTION_NAME: &str = "POST_TO_VOID_FORUM";

/// Alternate names the host may route to this action.
pub const ACTION_SIMILES: &[&str] = &[
    "FORUM_POST",
    "POST_LORE",
    "BROADCAST_TRANSMISSION",
    "SHARE_TO_FORUM",
    "POST_TRANSMISSION",
    "SEND_SIGNAL",
];

/// Action description shown to the host's router.
pub const ACTION_DESCRIPTION: &str = "Compose and post a transmission to the VoidVendor \
community forum. Use when asked to post, share something with the community, or broadcast.";

/// Callback reporting the terminal outcome to the host as a short
/// user-facing status string.
pub type StatusCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Host-supplied identity context folded into the compose template.
#[derive(Clone, Debug, Default)]
pub struct HostContext {
    pub bio: String,
    pub lore: String,
    pub message_directions: String,
}

/// The forum post action: validation gate plus the handler pipeline.
pub struct ForumPostAction {
    config: VendorConfig,
    intel: IntelClient,
    composer: TransmissionComposer,
    forum: ForumClient,
}

impl ForumPostAction {
    pub fn new(config: VendorConfig, generation: Arc<dyn GenerationClient>) -> Self {
        Self {
            intel: IntelClient::new(config.clone()),
            composer: TransmissionComposer::new(generation),
            forum: ForumClient::new(config.clone()),
            config,
        }
    }

    /// Whether the action is available at all. Fails closed when either the
    /// forum URL or the shared secret is missing; checked before any
    /// network activity.
    pub fn validate(&self) -> bool {
        self.config.is_configured()
    }

    /// Run one transmission cycle. Returns true only when the forum
    /// accepted the post. No step is retried; the host decides whether to
    /// re-invoke.
    pub async fn handle(&self, host: &HostContext, callback: &StatusCallback) -> bool {
        if !self.validate() {
            callback("transmission unavailable. the void is not configured.");
            return false;
        }

        let providers = self.intel.fetch_feed().await;
        let state = ComposeState {
            providers,
            bio: host.bio.clone(),
            lore: host.lore.clone(),
            message_directions: host.message_directions.clone(),
        };

        let transmission = match self.composer.compose(&state).await {
            Ok(transmission) => transmission,
            Err(ComposeError::Malformed { raw }) => {
                error!("failed to parse generated transmission: {}", raw);
                callback("transmission failed. signal corrupted.");
                return false;
            }
            Err(ComposeError::Generation(err)) => {
                error!("generation failed: {:#}", err);
                callback("signal lost. the void is quiet.");
                return false;
            }
        };

        match self.forum.publish(&transmission.title, &transmission.body).await {
            PublishResult::Published { title, .. } => {
                info!("posted transmission: {}", title);
                callback(&format!(
                    "transmission sent.\n\n\"{}\"\n\n{}",
                    title, transmission.body
                ));
                true
            }
            PublishResult::Rejected { status, body } => {
                error!("forum rejected transmission: {} {}", status, body);
                callback(&format!("transmission blocked. {}.", status));
                false
            }
            PublishResult::NetworkFailure(err) => {
                error!("failed to reach forum: {}", err);
                callback("signal lost. the void is quiet.");
                false
            }
        }
    }
}
