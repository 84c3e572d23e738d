//! Pure classification passes over user text
//!
//! Four total operations: sentiment polarity, emotion tags, subject themes,
//! and risk level. Absence of signal is a valid result, never an error; the
//! only failure path is a lexicon lookup of an unregistered category, which
//! indicates a misconfigured store rather than a runtime condition.
//!
//! Two deliberately different matching policies coexist here. Sentiment and
//! emotions use word-exact token membership; themes and risk use substring
//! containment on the raw lowercased text, because their keywords are
//! morphological cues ("job" implies work) or multi-word phrases.

use domain::{DomainError, RiskLevel, Sentiment};

use crate::lexicon::{LexiconStore, category};

/// Emotion tag used when no emotion keyword matched
const NEUTRAL_EMOTION: &str = "neutral";

/// Classify sentiment polarity from token counts
///
/// Counts tokens present in the positive and negative sentiment lexicons
/// and compares strictly; ties (including no matches at all) are neutral.
pub fn classify_sentiment(
    tokens: &[String],
    lexicon: &LexiconStore,
) -> Result<Sentiment, DomainError> {
    let positive = lexicon.lookup(category::POSITIVE_SENTIMENT)?;
    let negative = lexicon.lookup(category::NEGATIVE_SENTIMENT)?;

    let positive_count = tokens.iter().filter(|t| positive.contains(*t)).count();
    let negative_count = tokens.iter().filter(|t| negative.contains(*t)).count();

    Ok(Sentiment::from_counts(positive_count, negative_count))
}

/// Extract emotion tags by word-exact membership
///
/// A tag is emitted as soon as any one of its keywords appears in the token
/// set; there is no count threshold. Falls back to the `neutral` tag when
/// nothing matches, so the result is never empty.
#[must_use]
pub fn extract_emotions(tokens: &[String], lexicon: &LexiconStore) -> Vec<String> {
    let mut emotions: Vec<String> = lexicon
        .prefixed(category::EMOTION_PREFIX)
        .filter(|(_, keywords)| keywords.iter().any(|k| tokens.contains(k)))
        .map(|(tag, _)| tag.to_string())
        .collect();

    if emotions.is_empty() {
        emotions.push(NEUTRAL_EMOTION.to_string());
    }
    emotions
}

/// Extract subject themes by loose containment
///
/// The lowercased raw text is scanned for each theme keyword as a
/// substring; any hit emits the theme. May legitimately return nothing.
#[must_use]
pub fn extract_themes(text: &str, lexicon: &LexiconStore) -> Vec<String> {
    let lowered = text.to_lowercase();
    lexicon
        .prefixed(category::THEME_PREFIX)
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Assess the display risk level of the text
///
/// Presence-based, not counted: any high-risk phrase outranks any number of
/// medium-risk words.
pub fn assess_risk_level(text: &str, lexicon: &LexiconStore) -> Result<RiskLevel, DomainError> {
    let high = lexicon.lookup(category::RISK_HIGH_PHRASES)?;
    let medium = lexicon.lookup(category::RISK_MEDIUM_WORDS)?;

    let lowered = text.to_lowercase();
    if high.iter().any(|p| lowered.contains(p.as_str())) {
        return Ok(RiskLevel::High);
    }
    if medium.iter().any(|w| lowered.contains(w.as_str())) {
        return Ok(RiskLevel::Medium);
    }
    Ok(RiskLevel::Low)
}
