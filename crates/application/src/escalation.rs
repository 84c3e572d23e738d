//! Crisis phrase detection and escalation
//!
//! Scans raw text for the crisis phrase list and grades the result by how
//! many distinct phrases were found. Detection runs a pre-built
//! Aho-Corasick automaton so every phrase is found in a single pass,
//! including occurrences that overlap.

use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use domain::{CrisisSeverity, CrisisSignal, DomainError};
use tracing::warn;

use crate::lexicon::{LexiconStore, category};

/// Detector for crisis language in user text
///
/// Holds no mutable state; one detector serves any number of calls.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    matcher: AhoCorasick,
}

impl CrisisDetector {
    /// Build a detector over the store's crisis phrase category
    pub fn new(lexicon: &LexiconStore) -> Result<Self, DomainError> {
        let phrases = lexicon.lookup(category::CRISIS_PHRASES)?;
        #[allow(clippy::expect_used)] // Infallible with non-empty lowercase phrases
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(phrases)
            .expect("crisis phrase automaton");
        Ok(Self { matcher })
    }

    /// Scan text for crisis phrases
    ///
    /// Counts distinct phrase entries present as substrings of the
    /// lowercased text. Zero hits is the common case and yields no signal;
    /// otherwise severity grows with the distinct-hit count.
    #[must_use]
    pub fn detect(&self, text: &str) -> Option<CrisisSignal> {
        let lowered = text.to_lowercase();
        let mut matched: HashSet<usize> = HashSet::new();
        for hit in self.matcher.find_overlapping_iter(&lowered) {
            matched.insert(hit.pattern().as_usize());
        }

        let hits = matched.len();
        let severity = CrisisSeverity::from_hit_count(hits)?;
        if severity.escalates() {
            warn!(hits, "Critical crisis language detected");
        }
        Some(CrisisSignal::new(severity, hits, text))
    }
}
