//! Port definitions for application layer
//!
//! Ports are interfaces that define how analysis outcomes reach external
//! collaborators. Adapters outside this workspace implement them; the
//! engine itself performs no delivery.

mod notification_port;

#[cfg(test)]
pub use notification_port::MockNotificationPort;
pub use notification_port::{CrisisAlertNotification, NotificationPort};
