//! Analysis context value object - Identifies the originating UI surface

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI surface a piece of analyzed text originated from
///
/// Disambiguates the caller for logging and attribution. Classification
/// currently applies the same policy to every surface; the tag exists so a
/// later version can differentiate sensitivity per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisContext {
    /// A private journal entry
    Journal,
    /// A community board post or reply
    Community,
    /// A message to the chat companion
    Chat,
}

impl AnalysisContext {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Community => "community",
            Self::Chat => "chat",
        }
    }

    /// Get all contexts
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Journal, Self::Community, Self::Chat]
    }
}

impl fmt::Display for AnalysisContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
