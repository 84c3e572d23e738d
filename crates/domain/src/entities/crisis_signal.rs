//! Crisis signal entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::CrisisSeverity;

/// Maximum number of characters of source text carried in an excerpt
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Marker appended to an excerpt when the source text was truncated
const EXCERPT_ELLIPSIS: &str = "...";

/// Emitted when user text contains at least one crisis phrase
///
/// Handed to the caller for forwarding to the alerting collaborator. The
/// engine does not track delivery or resolution of a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisSignal {
    /// Severity graded from the distinct-phrase hit count
    pub severity: CrisisSeverity,
    /// Number of distinct crisis phrases found; always at least 1
    pub matched_phrase_count: usize,
    /// True exactly when severity is critical
    pub escalate: bool,
    /// Leading slice of the source text, at most [`EXCERPT_MAX_CHARS`]
    /// characters plus a truncation marker
    pub source_excerpt: String,
    /// Creation instant
    pub timestamp: DateTime<Utc>,
}

impl CrisisSignal {
    /// Create a signal from a severity, hit count, and the source text
    #[must_use]
    pub fn new(severity: CrisisSeverity, matched_phrase_count: usize, source_text: &str) -> Self {
        Self {
            severity,
            matched_phrase_count,
            escalate: severity.escalates(),
            source_excerpt: excerpt(source_text),
            timestamp: Utc::now(),
        }
    }
}

/// Truncate source text to the excerpt limit, marking truncation
///
/// Counts characters rather than bytes so multi-byte text never splits a
/// code point; the marker is appended only when something was cut.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_MAX_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(EXCERPT_MAX_CHARS).collect();
    cut.push_str(EXCERPT_ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_verbatim() {
        let signal = CrisisSignal::new(CrisisSeverity::Medium, 1, "i feel hopeless");
        assert_eq!(signal.source_excerpt, "i feel hopeless");
    }

    #[test]
    fn text_at_the_limit_is_not_marked() {
        let text = "a".repeat(EXCERPT_MAX_CHARS);
        let signal = CrisisSignal::new(CrisisSeverity::Medium, 1, &text);
        assert_eq!(signal.source_excerpt, text);
    }

    #[test]
    fn long_text_is_truncated_with_marker() {
        let text = "b".repeat(EXCERPT_MAX_CHARS + 50);
        let signal = CrisisSignal::new(CrisisSeverity::High, 2, &text);
        assert_eq!(signal.source_excerpt.chars().count(), EXCERPT_MAX_CHARS + 3);
        assert!(signal.source_excerpt.ends_with("..."));
        assert!(text.starts_with(signal.source_excerpt.trim_end_matches('.')));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ä".repeat(EXCERPT_MAX_CHARS + 10);
        let signal = CrisisSignal::new(CrisisSeverity::Medium, 1, &text);
        assert_eq!(signal.source_excerpt.chars().count(), EXCERPT_MAX_CHARS + 3);
    }

    #[test]
    fn escalate_follows_severity() {
        let medium = CrisisSignal::new(CrisisSeverity::Medium, 1, "text");
        let high = CrisisSignal::new(CrisisSeverity::High, 2, "text");
        let critical = CrisisSignal::new(CrisisSeverity::Critical, 3, "text");
        assert!(!medium.escalate);
        assert!(!high.escalate);
        assert!(critical.escalate);
    }

    #[test]
    fn serialization_roundtrip() {
        let signal = CrisisSignal::new(CrisisSeverity::Critical, 4, "some text");
        let json = serde_json::to_string(&signal).expect("serialize");
        let back: CrisisSignal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(signal, back);
    }
}
