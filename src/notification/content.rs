//! Notification text for each mode.

use crate::types::TimerMode;

/// Summary line shown on every notification.
pub const NOTIFICATION_SUMMARY: &str = "Pomodoro Clock";

/// Returns the notification body announcing that `mode` has begun.
#[must_use]
pub fn message_for(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Pomodoro => "Get back to work!",
        TimerMode::ShortBreak => "Take a break!",
        TimerMode::LongBreak => "Take a long break!",
    }
}
