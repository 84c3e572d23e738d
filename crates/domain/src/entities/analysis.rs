//! Text analysis result entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{RiskLevel, Sentiment};

/// Maximum number of coping recommendations attached to one result
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Emotion tag used when no emotion keyword matched
const NEUTRAL_EMOTION: &str = "neutral";

/// Output of one classification pass over a piece of user text
///
/// Created fresh per analysis call and immutable once returned. The caller
/// owns it; the engine retains nothing between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Coarse polarity of the text
    pub sentiment: Sentiment,
    /// Matched emotion tags; never empty, falls back to `neutral`
    pub emotions: Vec<String>,
    /// Matched subject themes; may be empty
    pub themes: Vec<String>,
    /// Display-oriented risk classification
    pub risk_level: RiskLevel,
    /// Synthetic confidence score in `[0.7, 1.0)`; no model backs it
    pub confidence: f32,
    /// Up to [`MAX_RECOMMENDATIONS`] coping recommendations
    pub recommendations: Vec<String>,
    /// Creation instant
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Create a result, stamping the current instant
    ///
    /// An empty emotion list falls back to the `neutral` tag and the
    /// recommendation list is capped at [`MAX_RECOMMENDATIONS`].
    #[must_use]
    pub fn new(
        sentiment: Sentiment,
        emotions: Vec<String>,
        themes: Vec<String>,
        risk_level: RiskLevel,
        confidence: f32,
        mut recommendations: Vec<String>,
    ) -> Self {
        let emotions = if emotions.is_empty() {
            vec![NEUTRAL_EMOTION.to_string()]
        } else {
            emotions
        };
        recommendations.truncate(MAX_RECOMMENDATIONS);

        Self {
            sentiment,
            emotions,
            themes,
            risk_level,
            confidence,
            recommendations,
            timestamp: Utc::now(),
        }
    }

    /// Whether a particular emotion tag was detected
    #[must_use]
    pub fn has_emotion(&self, tag: &str) -> bool {
        self.emotions.iter().any(|e| e == tag)
    }

    /// Whether a particular theme was detected
    #[must_use]
    pub fn has_theme(&self, tag: &str) -> bool {
        self.themes.iter().any(|t| t == tag)
    }
}
