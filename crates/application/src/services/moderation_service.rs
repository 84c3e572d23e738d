//! Community content moderation
//!
//! Keyword screen applied to community posts before publication. Matching
//! is substring containment on the lowercased content, the same loose
//! policy the theme pass uses.

use domain::{DomainError, ModerationVerdict};
use tracing::{debug, instrument};

use crate::lexicon::{LexiconStore, category};

/// Reason attached to rejected content
const REJECTION_REASON: &str = "Content contains inappropriate language";

/// Service screening community content against the flagged-word lexicon
#[derive(Debug, Clone)]
pub struct ModerationService {
    lexicon: &'static LexiconStore,
}

impl ModerationService {
    /// Create a service over the builtin lexicon
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LexiconStore::builtin(),
        }
    }

    /// Screen one piece of content
    ///
    /// Containment of any flagged word rejects the content; everything
    /// else is approved.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn moderate(&self, content: &str) -> Result<ModerationVerdict, DomainError> {
        let flagged = self.lexicon.lookup(category::MODERATION_FLAGGED)?;
        let lowered = content.to_lowercase();

        if flagged.iter().any(|w| lowered.contains(w.as_str())) {
            debug!("Content rejected by moderation screen");
            return Ok(ModerationVerdict::reject(REJECTION_REASON));
        }
        Ok(ModerationVerdict::approve())
    }
}

impl Default for ModerationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_content_is_approved() {
        let verdict = ModerationService::new()
            .moderate("sharing what helped me this week")
            .unwrap();
        assert!(verdict.approved);
        assert!(verdict.reason.is_none());
    }

    #[test]
    fn flagged_word_rejects_content() {
        let verdict = ModerationService::new()
            .moderate("this is a scam, do not trust it")
            .unwrap();
        assert!(!verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some(REJECTION_REASON));
    }

    #[test]
    fn screening_is_case_insensitive() {
        let verdict = ModerationService::new().moderate("STOP THE HATE").unwrap();
        assert!(!verdict.approved);
    }

    #[test]
    fn empty_content_is_approved() {
        let verdict = ModerationService::new().moderate("").unwrap();
        assert!(verdict.approved);
    }
}
