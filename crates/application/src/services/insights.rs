//! Journal insight generation
//!
//! One generated reflection line per journal entry, derived from its
//! analysis. Purely presentational text; the templates rotate randomly so
//! repeated entries do not read identically.

use domain::AnalysisResult;
use rand::Rng;

/// Generate one insight line for a journal entry's analysis
#[must_use]
pub fn journal_insight(analysis: &AnalysisResult) -> String {
    let mut templates = vec![
        format!(
            "Your journal entry shows {} sentiment. This reflects your current emotional state.",
            analysis.sentiment
        ),
        format!(
            "The emotions detected ({}) suggest you're processing various feelings.",
            analysis.emotions.join(", ")
        ),
        "Consider practicing mindfulness exercises to maintain emotional balance.".to_string(),
        "Your self-reflection shows good emotional awareness - keep journaling regularly."
            .to_string(),
    ];

    let index = rand::rng().random_range(0..templates.len());
    templates.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use domain::{RiskLevel, Sentiment};

    use super::*;

    fn analysis() -> AnalysisResult {
        AnalysisResult::new(
            Sentiment::Positive,
            vec!["happy".to_string(), "grateful".to_string()],
            Vec::new(),
            RiskLevel::Low,
            0.8,
            Vec::new(),
        )
    }

    #[test]
    fn insight_comes_from_the_template_set() {
        let analysis = analysis();
        let expected = [
            "Your journal entry shows positive sentiment. This reflects your current emotional state.".to_string(),
            "The emotions detected (happy, grateful) suggest you're processing various feelings.".to_string(),
            "Consider practicing mindfulness exercises to maintain emotional balance.".to_string(),
            "Your self-reflection shows good emotional awareness - keep journaling regularly.".to_string(),
        ];

        for _ in 0..40 {
            let insight = journal_insight(&analysis);
            assert!(expected.contains(&insight), "unexpected insight: {insight}");
        }
    }

    #[test]
    fn insight_is_never_empty() {
        assert!(!journal_insight(&analysis()).is_empty());
    }
}
