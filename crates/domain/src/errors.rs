//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lexicon lookup for a category that was never registered
    #[error("Unknown lexicon category: {category}")]
    UnknownCategory { category: String },

    /// A lexicon category was seeded without any keywords
    #[error("Lexicon category has no keywords: {category}")]
    EmptyLexicon { category: String },
}

impl DomainError {
    /// Create an unknown category error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an empty lexicon error
    pub fn empty_lexicon(category: impl Into<String>) -> Self {
        Self::EmptyLexicon {
            category: category.into(),
        }
    }
}
