//! Text analysis orchestration
//!
//! The single entry point behind every UI surface: runs the classifier
//! passes and crisis detection over one piece of user text and assembles
//! the result. Each surface used to carry its own copy of this matching
//! logic; they are all thin callers of this service now.

use domain::{AnalysisContext, AnalysisResult, CrisisSignal};
use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::classifier;
use crate::error::ApplicationError;
use crate::escalation::CrisisDetector;
use crate::lexicon::LexiconStore;
use crate::services::recommendations;
use crate::tokenizer::tokenize;

/// One completed analysis pass: the result plus an optional crisis signal
///
/// A present signal must be forwarded by the caller; the engine never
/// drops one.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The assembled classification result
    pub result: AnalysisResult,
    /// Present when crisis language was found
    pub crisis: Option<CrisisSignal>,
}

/// Service running classification and crisis detection over user text
///
/// Stateless between calls apart from the read-only builtin lexicon, so
/// concurrent calls from independent UI events are safe by construction.
#[derive(Debug, Clone)]
pub struct TextAnalysisService {
    lexicon: &'static LexiconStore,
    detector: CrisisDetector,
}

impl TextAnalysisService {
    /// Create a service over the builtin lexicon
    #[must_use]
    pub fn new() -> Self {
        let lexicon = LexiconStore::builtin();
        #[allow(clippy::expect_used)] // The builtin store registers every category
        let detector = CrisisDetector::new(lexicon).expect("builtin crisis category");
        Self { lexicon, detector }
    }

    /// Analyze one piece of user text
    ///
    /// The context tag records which surface originated the call; it does
    /// not change classification. Empty or whitespace-only input degrades
    /// to the neutral result rather than failing. The confidence score is
    /// synthetic, drawn uniformly from `[0.7, 1.0)`.
    #[instrument(skip(self, text), fields(context = %context, text_len = text.len()))]
    pub fn analyze(
        &self,
        text: &str,
        context: AnalysisContext,
    ) -> Result<AnalysisOutcome, ApplicationError> {
        let tokens = tokenize(text);

        let sentiment = classifier::classify_sentiment(&tokens, self.lexicon)?;
        let emotions = classifier::extract_emotions(&tokens, self.lexicon);
        let themes = classifier::extract_themes(text, self.lexicon);
        let risk_level = classifier::assess_risk_level(text, self.lexicon)?;

        // Independent of the classifier passes; a signal is always returned
        let crisis = self.detector.detect(text);
        if let Some(signal) = &crisis {
            warn!(
                severity = %signal.severity,
                hits = signal.matched_phrase_count,
                "Crisis language detected"
            );
        }

        let picks = recommendations::for_analysis(sentiment, &emotions, risk_level);
        let confidence = rand::rng().random_range(0.7f32..1.0f32);

        let result = AnalysisResult::new(sentiment, emotions, themes, risk_level, confidence, picks);
        debug!(
            sentiment = %result.sentiment,
            risk = %result.risk_level,
            emotions = result.emotions.len(),
            "Text analyzed"
        );

        Ok(AnalysisOutcome { result, crisis })
    }
}

impl Default for TextAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
