//! Domain entities - Analysis outputs handed to callers

mod analysis;
mod crisis_signal;
mod moderation;

pub use analysis::{AnalysisResult, MAX_RECOMMENDATIONS};
pub use crisis_signal::{CrisisSignal, EXCERPT_MAX_CHARS};
pub use moderation::ModerationVerdict;
