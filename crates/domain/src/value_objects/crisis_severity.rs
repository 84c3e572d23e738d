//! Crisis signal severity value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a detected crisis signal
///
/// Graded by how many distinct crisis phrases one piece of text contains.
/// This scale drives alert escalation and is deliberately distinct from
/// [`RiskLevel`](super::RiskLevel), which grades display risk; the two are
/// never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisSeverity {
    /// Exactly one distinct crisis phrase
    Medium,
    /// Two distinct crisis phrases
    High,
    /// Three or more distinct crisis phrases
    Critical,
}

impl CrisisSeverity {
    /// Map a distinct-phrase hit count to a severity
    ///
    /// Zero hits means no signal at all, so the mapping returns `None`.
    #[must_use]
    pub const fn from_hit_count(hits: usize) -> Option<Self> {
        match hits {
            0 => None,
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => Some(Self::Critical),
        }
    }

    /// Whether this severity must trigger escalation
    #[must_use]
    pub const fn escalates(&self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Get all severities in ascending order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Medium, Self::High, Self::Critical]
    }
}

impl fmt::Display for CrisisSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
