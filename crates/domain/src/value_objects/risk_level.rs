//! Self-harm risk level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier classification of self-harm risk language
///
/// Presence-based, not counted: any high-risk phrase in the text outranks
/// any number of medium-risk words. Used by the UI for display coloring;
/// escalation decisions use the separate crisis severity scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No risk keywords found
    #[default]
    Low,
    /// At least one medium-risk word, no high-risk phrase
    Medium,
    /// At least one high-risk phrase, regardless of medium matches
    High,
}

impl RiskLevel {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Get all risk levels in ascending order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ascends_with_risk() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn default_is_low() {
        assert_eq!(RiskLevel::default(), RiskLevel::Low);
    }

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn all_is_ascending() {
        let all = RiskLevel::all();
        assert_eq!(all, [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]);
    }

    #[test]
    fn serialization_roundtrip() {
        let json = serde_json::to_string(&RiskLevel::High).expect("serialize");
        assert_eq!(json, "\"high\"");

        let deserialized: RiskLevel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(deserialized, RiskLevel::High);
    }
}
