//! VoidVendor - Shared Type Definitions
//!
//! Core types for the transmission pipeline: the generation collaborator
//! trait, the parsed transmission, and the terminal pipeline outcomes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Generation Collaborator ─────────────────────────────────────

/// Text-in/text-out generation collaborator.
///
/// The pipeline hands a fully composed context to this trait and gets back
/// freeform generated text. Model choice, prompting mechanics, and transport
/// all belong to the implementation; the pipeline depends only on this
/// contract.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Run one generation call over `context` and return the raw output.
    async fn generate(&self, context: &str) -> anyhow::Result<String>;
}

// ─── Transmission ────────────────────────────────────────────────

/// A parsed transmission: the title/body pair extracted from generated
/// output and submitted to the forum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    pub title: String,
    pub body: String,
}

/// Failure modes of the compose step. Terminal per invocation; the caller
/// decides whether to re-invoke.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The generation collaborator itself failed (transport, API error).
    #[error("generation call failed: {0}")]
    Generation(anyhow::Error),

    /// The generated text did not contain both TITLE: and BODY: markers.
    /// Carries the raw output for diagnostics.
    #[error("generated output missing TITLE/BODY markers")]
    Malformed { raw: String },
}

// ─── Publish Outcome ─────────────────────────────────────────────

/// Terminal outcome of one forum submission. Exactly one attempt is made
/// per invocation; none of these variants triggers a retry.
#[derive(Debug)]
pub enum PublishResult {
    /// The forum accepted the post (2xx).
    Published { title: String, posted_at: String },

    /// The forum answered with a non-success status. The response body is
    /// read for diagnostics even on failure.
    Rejected { status: u16, body: String },

    /// The forum could not be reached at the transport level.
    NetworkFailure(reqwest::Error),
}

impl PublishResult {
    pub fn is_published(&self) -> bool {
        matches!(self, PublishResult::Published { .. })
    }
}
