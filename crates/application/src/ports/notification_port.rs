//! Notification port - Interface for the crisis alerting subsystem

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CrisisSeverity, CrisisSignal, UserId};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Payload forwarded to the alerting subsystem for one crisis signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisAlertNotification {
    /// User whose text produced the signal
    pub user: UserId,
    /// Severity of the signal
    pub severity: CrisisSeverity,
    /// Whether the alert must be escalated
    pub escalate: bool,
    /// Leading excerpt of the originating text
    pub source_excerpt: String,
    /// When the signal was created
    pub timestamp: DateTime<Utc>,
}

impl CrisisAlertNotification {
    /// Build the payload for a signal produced by a user's text
    #[must_use]
    pub fn from_signal(user: UserId, signal: &CrisisSignal) -> Self {
        Self {
            user,
            severity: signal.severity,
            escalate: signal.escalate,
            source_excerpt: signal.source_excerpt.clone(),
            timestamp: signal.timestamp,
        }
    }
}

/// Port for crisis alert delivery
///
/// Delivery, persistence, and resolution tracking belong to the adapter;
/// the engine only hands the payload over.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Forward a crisis alert to the alerting subsystem
    async fn send_crisis_alert(
        &self,
        alert: CrisisAlertNotification,
    ) -> Result<(), ApplicationError>;
}
