//! Coping recommendation selection
//!
//! A fixed decision table keyed by sentiment, emotion tags, and risk level,
//! composed in table order and capped, plus the general self-care pool used
//! for daily suggestions.

use domain::{MAX_RECOMMENDATIONS, RiskLevel, Sentiment};

const PROFESSIONAL_SUPPORT: &str = "Consider reaching out to a mental health professional";
const GROUNDING: &str = "Practice grounding techniques like deep breathing";
const BREATHING_4_7_8: &str = "Try the 4-7-8 breathing technique";
const MUSCLE_RELAXATION: &str = "Consider progressive muscle relaxation";
const JOYFUL_ACTIVITIES: &str = "Engage in activities that usually bring you joy";
const CONNECT_SUPPORT: &str = "Connect with supportive friends or family";
const KEEP_MOMENTUM: &str = "Keep up the positive momentum";
const SHARE_SUCCESS: &str = "Consider sharing your success with others";

/// General self-care suggestion pool
const SELF_CARE_POOL: &[&str] = &[
    "Try a 10-minute morning meditation to start your day positively",
    "Consider journaling about three things you're grateful for",
    "Take a short walk outside to boost your mood naturally",
    "Practice deep breathing exercises when feeling stressed",
    "Connect with a friend or family member today",
    "Listen to calming music or nature sounds",
    "Set a consistent sleep schedule for better mental health",
];

/// Select up to three recommendations for one analysis
///
/// Entries compose in table order, duplicates are skipped, and selection
/// stops at the cap. Neutral text with no matching emotions legitimately
/// gets none.
#[must_use]
pub fn for_analysis(
    sentiment: Sentiment,
    emotions: &[String],
    risk_level: RiskLevel,
) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();

    if sentiment == Sentiment::Negative || risk_level == RiskLevel::High {
        push_unique(&mut selected, PROFESSIONAL_SUPPORT);
        push_unique(&mut selected, GROUNDING);
    }
    if emotions.iter().any(|e| e == "anxious") {
        push_unique(&mut selected, BREATHING_4_7_8);
        push_unique(&mut selected, MUSCLE_RELAXATION);
    }
    if emotions.iter().any(|e| e == "sad") {
        push_unique(&mut selected, JOYFUL_ACTIVITIES);
        push_unique(&mut selected, CONNECT_SUPPORT);
    }
    if sentiment == Sentiment::Positive {
        push_unique(&mut selected, KEEP_MOMENTUM);
        push_unique(&mut selected, SHARE_SUCCESS);
    }

    selected.truncate(MAX_RECOMMENDATIONS);
    selected
}

/// First `count` entries of the general self-care pool
#[must_use]
pub fn daily_suggestions(count: usize) -> Vec<String> {
    SELF_CARE_POOL
        .iter()
        .take(count)
        .map(ToString::to_string)
        .collect()
}

fn push_unique(selected: &mut Vec<String>, entry: &str) {
    if !selected.iter().any(|e| e == entry) {
        selected.push(entry.to_string());
    }
}
