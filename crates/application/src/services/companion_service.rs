//! Chat companion replies
//!
//! Keyword-keyed supportive responses for the chat surface. Crisis language
//! takes precedence over every topic reply, and a detected signal is
//! forwarded to the alerting collaborator before the reply is returned.

use std::fmt;
use std::sync::Arc;

use domain::{AnalysisContext, CrisisSignal, UserId};
use rand::Rng;
use tracing::{debug, error, instrument};

use crate::error::ApplicationError;
use crate::ports::{CrisisAlertNotification, NotificationPort};
use crate::services::analysis_service::TextAnalysisService;

/// Classification of a companion reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Regular supportive conversation
    Normal,
    /// Crisis support reply; an alert was dispatched alongside it
    Crisis,
}

/// A reply produced for one user message
#[derive(Debug, Clone)]
pub struct CompanionReply {
    /// The reply text shown to the user
    pub content: String,
    /// Whether this reply is a crisis intervention
    pub kind: ReplyKind,
}

/// Topic response keyed by trigger keywords
struct TopicResponse {
    keywords: &'static [&'static str],
    response: &'static str,
}

const CRISIS_RESPONSE: &str = "I'm very concerned about what you've shared. Your life has value \
    and there are people who want to help. Please consider reaching out to a crisis hotline \
    immediately. In the US, you can call 988 for the Suicide & Crisis Lifeline. Would you like \
    me to help you find local emergency resources?";

const TOPIC_RESPONSES: &[TopicResponse] = &[
    TopicResponse {
        keywords: &["anxious", "anxiety"],
        response: "I understand you're feeling anxious. Anxiety can be overwhelming, but there \
            are techniques that can help. Try the 4-7-8 breathing technique: breathe in for 4 \
            counts, hold for 7, exhale for 8. Would you like me to guide you through some other \
            grounding exercises?",
    },
    TopicResponse {
        keywords: &["sad", "depressed"],
        response: "I hear that you're feeling sad. It's important to acknowledge these feelings \
            rather than push them away. Sometimes sadness is our mind's way of processing \
            difficult experiences. Have you been able to engage in any activities that usually \
            bring you joy recently?",
    },
    TopicResponse {
        keywords: &["stressed", "stress"],
        response: "Stress can really take a toll on both our mental and physical health. Let's \
            work on some stress management techniques. Have you tried progressive muscle \
            relaxation or mindfulness meditation? I can guide you through either of these.",
    },
    TopicResponse {
        keywords: &["sleep", "insomnia"],
        response: "Sleep issues can significantly impact mental health. Good sleep hygiene is \
            crucial. Try establishing a consistent bedtime routine, avoiding screens an hour \
            before bed, and creating a calm environment. Are there specific thoughts keeping \
            you awake at night?",
    },
    TopicResponse {
        keywords: &["thank", "help"],
        response: "I'm glad I could help! Remember, seeking support is a sign of strength, not \
            weakness. It's wonderful that you're taking steps to care for your mental health. \
            Is there anything specific you'd like to work on or discuss further?",
    },
];

const DEFAULT_RESPONSES: &[&str] = &[
    "Thank you for sharing that with me. It takes courage to open up about your feelings. Can \
     you tell me more about what's been on your mind lately?",
    "I appreciate you trusting me with your thoughts. Your feelings are valid, and it's \
     important to process them. What's been the most challenging part of your day?",
    "I'm here to listen and support you. Everyone faces difficult times, and you're not alone \
     in this. What kind of support would be most helpful for you right now?",
    "It sounds like you're going through a lot. Remember that it's okay to not be okay \
     sometimes. What are some things that have helped you cope in the past?",
];

/// Service producing supportive replies for the chat surface
pub struct CompanionService {
    analysis: TextAnalysisService,
    notifications: Arc<dyn NotificationPort>,
}

impl fmt::Debug for CompanionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanionService")
            .field("analysis", &self.analysis)
            .finish_non_exhaustive()
    }
}

impl CompanionService {
    /// Create a companion wired to an alerting collaborator
    #[must_use]
    pub fn new(notifications: Arc<dyn NotificationPort>) -> Self {
        Self {
            analysis: TextAnalysisService::new(),
            notifications,
        }
    }

    /// Produce a reply to one user message
    ///
    /// Runs the full analysis over the message. Crisis language yields the
    /// crisis support reply and forwards an alert through the notification
    /// port; a failed dispatch is logged and never suppresses the reply.
    #[instrument(skip(self, message), fields(user = %user, message_len = message.len()))]
    pub async fn respond(
        &self,
        user: UserId,
        message: &str,
    ) -> Result<CompanionReply, ApplicationError> {
        let outcome = self.analysis.analyze(message, AnalysisContext::Chat)?;

        if let Some(signal) = outcome.crisis {
            self.dispatch_alert(user, &signal).await;
            return Ok(CompanionReply {
                content: CRISIS_RESPONSE.to_string(),
                kind: ReplyKind::Crisis,
            });
        }

        Ok(CompanionReply {
            content: Self::topic_response(message),
            kind: ReplyKind::Normal,
        })
    }

    /// Forward a crisis signal to the alerting collaborator
    async fn dispatch_alert(&self, user: UserId, signal: &CrisisSignal) {
        let alert = CrisisAlertNotification::from_signal(user, signal);
        match self.notifications.send_crisis_alert(alert).await {
            Ok(()) => debug!(severity = %signal.severity, "Crisis alert dispatched"),
            Err(e) => {
                error!(
                    error = %e,
                    severity = %signal.severity,
                    "Failed to dispatch crisis alert"
                );
            },
        }
    }

    /// Select the keyword-keyed topic reply, or a default supportive one
    fn topic_response(message: &str) -> String {
        let lowered = message.to_lowercase();
        for topic in TOPIC_RESPONSES {
            if topic.keywords.iter().any(|kw| lowered.contains(kw)) {
                return topic.response.to_string();
            }
        }

        let index = rand::rng().random_range(0..DEFAULT_RESPONSES.len());
        DEFAULT_RESPONSES[index].to_string()
    }
}

#[cfg(test)]
mod tests {
    use domain::CrisisSeverity;

    use super::*;
    use crate::ports::MockNotificationPort;

    fn companion(mock: MockNotificationPort) -> CompanionService {
        CompanionService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn crisis_message_dispatches_an_alert() {
        let mut mock = MockNotificationPort::new();
        mock.expect_send_crisis_alert()
            .withf(|alert| alert.severity == CrisisSeverity::High && !alert.escalate)
            .times(1)
            .returning(|_| Ok(()));

        let reply = companion(mock)
            .respond(UserId::new(), "I want to kill myself, there's no point anymore")
            .await
            .unwrap();

        assert_eq!(reply.kind, ReplyKind::Crisis);
        assert!(reply.content.contains("988"));
    }

    #[tokio::test]
    async fn critical_message_marks_the_alert_for_escalation() {
        let mut mock = MockNotificationPort::new();
        mock.expect_send_crisis_alert()
            .withf(|alert| alert.severity == CrisisSeverity::Critical && alert.escalate)
            .times(1)
            .returning(|_| Ok(()));

        let reply = companion(mock)
            .respond(UserId::new(), "suicide, kill myself, no point living")
            .await
            .unwrap();

        assert_eq!(reply.kind, ReplyKind::Crisis);
    }

    #[tokio::test]
    async fn failed_dispatch_still_returns_the_crisis_reply() {
        let mut mock = MockNotificationPort::new();
        mock.expect_send_crisis_alert()
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("gateway down".into())));

        let reply = companion(mock)
            .respond(UserId::new(), "I feel hopeless")
            .await
            .unwrap();

        assert_eq!(reply.kind, ReplyKind::Crisis);
        assert!(reply.content.contains("crisis hotline"));
    }

    #[tokio::test]
    async fn anxious_message_gets_the_breathing_reply() {
        let reply = companion(MockNotificationPort::new())
            .respond(UserId::new(), "my anxiety is bad before exams")
            .await
            .unwrap();

        assert_eq!(reply.kind, ReplyKind::Normal);
        assert!(reply.content.contains("4-7-8 breathing"));
    }

    #[tokio::test]
    async fn sleep_message_gets_the_sleep_hygiene_reply() {
        let reply = companion(MockNotificationPort::new())
            .respond(UserId::new(), "I barely sleep these days")
            .await
            .unwrap();

        assert!(reply.content.contains("sleep hygiene"));
    }

    #[tokio::test]
    async fn gratitude_message_gets_the_encouragement_reply() {
        let reply = companion(MockNotificationPort::new())
            .respond(UserId::new(), "thank you, that was useful")
            .await
            .unwrap();

        assert!(reply.content.contains("sign of strength"));
    }

    #[tokio::test]
    async fn unmatched_message_gets_a_default_supportive_reply() {
        let reply = companion(MockNotificationPort::new())
            .respond(UserId::new(), "the weather turned cold this week")
            .await
            .unwrap();

        assert_eq!(reply.kind, ReplyKind::Normal);
        assert!(DEFAULT_RESPONSES.contains(&reply.content.as_str()));
    }
}
