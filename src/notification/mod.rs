//! Desktop notification system.
//!
//! This module announces interval boundaries through the platform
//! notification service (notify-rust). Notifications are best-effort:
//! a missing daemon or denied permission never affects the countdown.
//!
//! # Example
//!
//! ```rust,no_run
//! use pomodoro_clock::notification::{DesktopNotifier, Notifier, message_for};
//! use pomodoro_clock::types::TimerMode;
//!
//! let notifier = DesktopNotifier::new(false);
//! let _ = notifier.notify(message_for(TimerMode::ShortBreak));
//! ```

mod content;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use notify_rust::{Notification, Timeout};
use tracing::debug;

pub use self::content::{message_for, NOTIFICATION_SUMMARY};
pub use self::error::NotificationError;

/// How long a notification stays on screen.
const NOTIFICATION_TIMEOUT_MS: u32 = 10_000;

/// Trait for notification implementations.
pub trait Notifier {
    /// Shows `message` to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform service could not be reached.
    fn notify(&self, message: &str) -> Result<(), NotificationError>;

    /// Returns true if notifications are turned off.
    fn is_disabled(&self) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str) -> Result<(), NotificationError> {
        (**self).notify(message)
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

// ============================================================================
// DesktopNotifier
// ============================================================================

/// Sends notifications through the desktop notification service.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    disabled: bool,
}

impl DesktopNotifier {
    /// Creates a notifier. A disabled notifier silently drops every message.
    #[must_use]
    pub fn new(disabled: bool) -> Self {
        Self { disabled }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) -> Result<(), NotificationError> {
        if self.is_disabled() {
            debug!("Notifications disabled, skipping");
            return Ok(());
        }

        Notification::new()
            .summary(NOTIFICATION_SUMMARY)
            .body(message)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS))
            .show()
            .map(|_| ())?;

        debug!(message, "Notification sent");
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    messages: Mutex<Vec<String>>,
    should_fail: AtomicBool,
    disabled: AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Returns every message passed to `notify`, including failed ones.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) -> Result<(), NotificationError> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("mock failure".to_string()));
        }
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}
