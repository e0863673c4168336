//! Notification error types.

use thiserror::Error;

/// Errors that can occur while showing a desktop notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notification daemon rejected or never received the notification.
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}

impl NotificationError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => {
                "check that a notification daemon is running, or pass --no-notify"
            }
        }
    }
}

impl From<notify_rust::error::Error> for NotificationError {
    fn from(err: notify_rust::error::Error) -> Self {
        Self::SendFailed(err.to_string())
    }
}
