//! Application services - Use case implementations

mod analysis_service;
mod companion_service;
mod insights;
mod moderation_service;
mod recommendations;

pub use analysis_service::{AnalysisOutcome, TextAnalysisService};
pub use companion_service::{CompanionReply, CompanionService, ReplyKind};
pub use insights::journal_insight;
pub use moderation_service::ModerationService;
pub use recommendations::daily_suggestions;
