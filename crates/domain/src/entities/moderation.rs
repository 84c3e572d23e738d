//! Community content moderation verdict

use serde::{Deserialize, Serialize};

/// Outcome of screening a piece of community content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Whether the content may be published
    pub approved: bool,
    /// Reason for disapproval, absent when approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ModerationVerdict {
    /// Verdict approving the content
    #[must_use]
    pub const fn approve() -> Self {
        Self {
            approved: true,
            reason: None,
        }
    }

    /// Verdict rejecting the content with a reason
    #[must_use]
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: Some(reason.into()),
        }
    }
}
