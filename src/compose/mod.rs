//! Transmission Composer
//!
//! Drives exactly one generation call over the composed context and parses
//! the output into a title/body pair. Parsing is a narrow two-field
//! extraction: a case-insensitive TITLE: line and a BODY: section running
//! to the end of the text. Anything else is a hard compose failure carrying
//! the raw output; there is no retry and no best-effort recovery here.

use std::sync::Arc;

use regex::Regex;

use crate::types::{ComposeError, GenerationClient, Transmission};

pub mod template;

pub use template::{compose_context, FORUM_POST_TEMPLATE};

/// Host-supplied context bundle for one transmission. `providers` carries
/// the rendered intel feed (possibly empty).
#[derive(Clone, Debug, Default)]
pub struct ComposeState {
    pub providers: String,
    pub bio: String,
    pub lore: String,
    pub message_directions: String,
}

/// Composes transmissions through a generation collaborator.
pub struct TransmissionComposer {
    generation: Arc<dyn GenerationClient>,
}

impl TransmissionComposer {
    pub fn new(generation: Arc<dyn GenerationClient>) -> Self {
        Self { generation }
    }

    /// Run one compose cycle: build the context, call the collaborator
    /// once, and parse the result. Malformed output is surfaced as
    /// `ComposeError::Malformed`, not retried.
    pub async fn compose(&self, state: &ComposeState) -> Result<Transmission, ComposeError> {
        let context = compose_context(state, FORUM_POST_TEMPLATE);
        let generated = self
            .generation
            .generate(&context)
            .await
            .map_err(ComposeError::Generation)?;
        parse_transmission(&generated)
    }
}

/// Extract the title/body pair from generated text.
///
/// Both markers are matched case-insensitively; the title is the remainder
/// of its line, the body everything after its marker. Both are trimmed of
/// surrounding whitespace. No other normalization is applied.
pub fn parse_transmission(generated: &str) -> Result<Transmission, ComposeError> {
    let title = Regex::new(r"(?i)TITLE:\s*(.+)")
        .ok()
        .and_then(|re| {
            re.captures(generated)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|t| !t.is_empty());

    let body = Regex::new(r"(?is)BODY:\s*(.+)")
        .ok()
        .and_then(|re| {
            re.captures(generated)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|b| !b.is_empty());

    match (title, body) {
        (Some(title), Some(body)) => Ok(Transmission { title, body }),
        _ => Err(ComposeError::Malformed {
            raw: generated.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Generation stub returning a canned string.
    struct CannedGeneration(String);

    #[async_trait]
    impl GenerationClient for CannedGeneration {
        async fn generate(&self, _context: &str) -> anyhow::Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Generation stub that always fails.
    struct BrokenGeneration;

    #[async_trait]
    impl GenerationClient for BrokenGeneration {
        async fn generate(&self, _context: &str) -> anyhow::Result<String> {
            anyhow::bail!("model offline")
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        let parsed = parse_transmission("TITLE: X\nBODY:\nY").unwrap();
        assert_eq!(parsed.title, "X");
        assert_eq!(parsed.body, "Y");
    }

    #[test]
    fn test_parse_multiline_body() {
        let parsed =
            parse_transmission("TITLE: the hum\nBODY:\nline one\nline two\n").unwrap();
        assert_eq!(parsed.title, "the hum");
        assert_eq!(parsed.body, "line one\nline two");
    }

    #[test]
    fn test_parse_case_insensitive_markers() {
        let parsed = parse_transmission("title: quiet\nbody:\nstill here").unwrap();
        assert_eq!(parsed.title, "quiet");
        assert_eq!(parsed.body, "still here");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_transmission("TITLE:   spaced out  \nBODY:\n\n  drift  \n\n").unwrap();
        assert_eq!(parsed.title, "spaced out");
        assert_eq!(parsed.body, "drift");
    }

    #[test]
    fn test_missing_body_is_malformed() {
        let result = parse_transmission("TITLE: alone");
        match result {
            Err(ComposeError::Malformed { raw }) => assert_eq!(raw, "TITLE: alone"),
            other => panic!("expected Malformed, got {:?}", other.map(|t| t.title)),
        }
    }

    #[test]
    fn test_missing_title_is_malformed() {
        assert!(matches!(
            parse_transmission("BODY:\nno headline"),
            Err(ComposeError::Malformed { .. })
        ));
    }

    #[test]
    fn test_freeform_text_is_malformed() {
        assert!(matches!(
            parse_transmission("the model ignored the format entirely"),
            Err(ComposeError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn test_compose_parses_generated_output() {
        let composer = TransmissionComposer::new(Arc::new(CannedGeneration(
            "TITLE: static\nBODY:\nthe wires remember".to_string(),
        )));
        let transmission = composer.compose(&ComposeState::default()).await.unwrap();
        assert_eq!(transmission.title, "static");
        assert_eq!(transmission.body, "the wires remember");
    }

    #[tokio::test]
    async fn test_compose_surfaces_generation_failure() {
        let composer = TransmissionComposer::new(Arc::new(BrokenGeneration));
        assert!(matches!(
            composer.compose(&ComposeState::default()).await,
            Err(ComposeError::Generation(_))
        ));
    }
}
