//! Sentiment polarity value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sentiment polarity of user-authored text
///
/// Derived from keyword counting: strictly more positive than negative
/// keyword occurrences yields `Positive`, the reverse `Negative`, and any
/// tie (including no matches at all) `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative keywords
    Positive,
    /// Tied counts, including text with no sentiment keywords at all
    #[default]
    Neutral,
    /// More negative than positive keywords
    Negative,
}

impl Sentiment {
    /// Derive the polarity from positive/negative keyword counts
    ///
    /// Ties are neutral; only a strict majority in either direction moves
    /// the label.
    #[must_use]
    pub const fn from_counts(positive: usize, negative: usize) -> Self {
        if positive > negative {
            Self::Positive
        } else if negative > positive {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Get all sentiment values
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Positive, Self::Neutral, Self::Negative]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
