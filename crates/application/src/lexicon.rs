//! Keyword lexicons backing every classification pass
//!
//! Categories are seeded once at process start from a fixed table and never
//! mutated. There is no path to add keywords at runtime; the matching code
//! assumes a closed vocabulary per call. Looking up a category that was
//! never registered is a construction-time bug and fails loudly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use domain::DomainError;

/// Registered category names
pub mod category {
    /// Words counted toward positive sentiment
    pub const POSITIVE_SENTIMENT: &str = "positive_sentiment";
    /// Words counted toward negative sentiment
    pub const NEGATIVE_SENTIMENT: &str = "negative_sentiment";
    /// Prefix of the per-emotion keyword categories
    pub const EMOTION_PREFIX: &str = "emotion.";
    /// Prefix of the per-theme keyword categories
    pub const THEME_PREFIX: &str = "theme.";
    /// Words that mark medium self-harm risk
    pub const RISK_MEDIUM_WORDS: &str = "risk.medium_words";
    /// Phrases that mark high self-harm risk
    pub const RISK_HIGH_PHRASES: &str = "risk.high_phrases";
    /// The broader phrase list scanned by crisis detection
    pub const CRISIS_PHRASES: &str = "crisis.phrases";
    /// Words that fail community content moderation
    pub const MODERATION_FLAGGED: &str = "moderation.flagged";
}

/// Fixed seed table for the builtin store
static BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        category::POSITIVE_SENTIMENT,
        &[
            "happy", "good", "great", "wonderful", "amazing", "love", "joy", "excited",
            "grateful", "blessed",
        ],
    ),
    (
        category::NEGATIVE_SENTIMENT,
        &[
            "sad", "bad", "terrible", "awful", "hate", "angry", "depressed", "anxious",
            "worried", "stressed",
        ],
    ),
    ("emotion.happy", &["happy", "joy", "excited", "cheerful", "elated"]),
    ("emotion.sad", &["sad", "down", "blue", "melancholy", "depressed"]),
    (
        "emotion.anxious",
        &["anxious", "worried", "nervous", "stressed", "overwhelmed"],
    ),
    ("emotion.angry", &["angry", "mad", "frustrated", "irritated", "furious"]),
    ("emotion.grateful", &["grateful", "thankful", "blessed", "appreciative"]),
    ("emotion.hopeful", &["hopeful", "optimistic", "confident", "positive"]),
    ("emotion.lonely", &["lonely", "isolated", "alone", "disconnected"]),
    ("theme.work", &["work", "job", "career"]),
    ("theme.family", &["family", "parent", "sibling"]),
    ("theme.relationships", &["relationship", "partner", "friend"]),
    ("theme.health", &["health", "medical", "doctor"]),
    ("theme.education", &["school", "study", "exam"]),
    (
        category::RISK_MEDIUM_WORDS,
        &["hopeless", "worthless", "burden", "give up"],
    ),
    (
        category::RISK_HIGH_PHRASES,
        &["suicide", "kill myself", "end it all", "no point living"],
    ),
    (
        category::CRISIS_PHRASES,
        &[
            "suicide", "kill myself", "end it all", "hurt myself", "die", "death",
            "hopeless", "no point", "give up", "cant go on", "self harm", "overdose",
        ],
    ),
    (category::MODERATION_FLAGGED, &["spam", "scam", "hate", "violence"]),
];

/// Process-wide store seeded from the fixed table
static BUILTIN: LazyLock<LexiconStore> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with the non-empty static table
    LexiconStore::from_entries(
        BUILTIN_ENTRIES
            .iter()
            .map(|(name, words)| (*name, words.iter().copied())),
    )
    .expect("builtin lexicon table is valid")
});

/// Immutable keyword tables keyed by category name
#[derive(Debug, Clone)]
pub struct LexiconStore {
    categories: BTreeMap<String, Vec<String>>,
}

impl LexiconStore {
    /// Build a store from `(category, keywords)` entries
    ///
    /// Keywords are lowercased on load. A category with no keywords is
    /// rejected with [`DomainError::EmptyLexicon`].
    pub fn from_entries<'a, I, K>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a str, K)>,
        K: IntoIterator<Item = &'a str>,
    {
        let mut categories = BTreeMap::new();
        for (name, keywords) in entries {
            let keywords: Vec<String> = keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .collect();
            if keywords.is_empty() {
                return Err(DomainError::empty_lexicon(name));
            }
            categories.insert(name.to_string(), keywords);
        }
        Ok(Self { categories })
    }

    /// The process-wide store seeded from the builtin table
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Look up the keyword set registered under a category name
    pub fn lookup(&self, category: &str) -> Result<&[String], DomainError> {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::unknown_category(category))
    }

    /// Iterate categories under a prefix as `(tag, keywords)` pairs
    ///
    /// The tag is the category name with the prefix stripped. Iteration
    /// follows the sorted category order, so anything built from it is
    /// deterministic across calls.
    pub fn prefixed<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.categories.iter().filter_map(move |(name, keywords)| {
            name.strip_prefix(prefix)
                .map(|tag| (tag, keywords.as_slice()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_registered_keywords() {
        let store = LexiconStore::builtin();
        let words = store.lookup(category::POSITIVE_SENTIMENT).unwrap();
        assert!(words.contains(&"happy".to_string()));
        assert!(words.contains(&"grateful".to_string()));
    }

    #[test]
    fn lookup_of_unregistered_category_fails() {
        let store = LexiconStore::builtin();
        let err = store.lookup("emotion.bored").unwrap_err();
        assert!(matches!(err, DomainError::UnknownCategory { .. }));
    }

    #[test]
    fn empty_category_is_rejected_at_construction() {
        let empty: [&str; 0] = [];
        let err = LexiconStore::from_entries([("theme.work", empty.iter().copied())]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyLexicon { .. }));
    }

    #[test]
    fn keywords_are_lowercased_on_load() {
        let store =
            LexiconStore::from_entries([("emotion.happy", ["HAPPY", " Joy "].iter().copied())])
                .unwrap();
        let words = store.lookup("emotion.happy").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], "happy");
        assert_eq!(words[1], "joy");
    }

    #[test]
    fn builtin_registers_every_required_category() {
        let store = LexiconStore::builtin();
        for name in [
            category::POSITIVE_SENTIMENT,
            category::NEGATIVE_SENTIMENT,
            category::RISK_MEDIUM_WORDS,
            category::RISK_HIGH_PHRASES,
            category::CRISIS_PHRASES,
            category::MODERATION_FLAGGED,
        ] {
            assert!(store.lookup(name).is_ok(), "missing category {name}");
        }
    }

    #[test]
    fn builtin_emotion_categories_cover_the_tag_set() {
        let store = LexiconStore::builtin();
        let tags: Vec<&str> = store
            .prefixed(category::EMOTION_PREFIX)
            .map(|(tag, _)| tag)
            .collect();
        for tag in ["happy", "sad", "anxious", "angry", "grateful", "hopeful", "lonely"] {
            assert!(tags.contains(&tag), "missing emotion {tag}");
        }
    }

    #[test]
    fn prefixed_iteration_is_sorted() {
        let store = LexiconStore::builtin();
        let tags: Vec<&str> = store
            .prefixed(category::THEME_PREFIX)
            .map(|(tag, _)| tag)
            .collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn prefixed_does_not_leak_other_categories() {
        let store = LexiconStore::builtin();
        for (tag, _) in store.prefixed(category::EMOTION_PREFIX) {
            assert!(!tag.contains('.'), "unexpected nested tag {tag}");
            assert!(!tag.is_empty());
        }
    }

    #[test]
    fn crisis_phrases_are_a_superset_of_shared_high_risk_entries() {
        let store = LexiconStore::builtin();
        let crisis = store.lookup(category::CRISIS_PHRASES).unwrap();
        assert!(crisis.contains(&"suicide".to_string()));
        assert!(crisis.contains(&"kill myself".to_string()));
        assert!(crisis.contains(&"overdose".to_string()));
    }
}
