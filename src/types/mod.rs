//! Core data types for the Pomodoro Clock.
//!
//! This module defines the data structures used for:
//! - Timer modes (pomodoro, short break, long break)
//! - Timer configuration with validation
//! - The remaining-time view and the mutable timer state

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// TimerMode
// ============================================================================

/// The kind of interval the clock is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    /// Focused work interval
    #[default]
    Pomodoro,
    /// Short break between pomodoros
    ShortBreak,
    /// Long break after every `long_break_interval` pomodoros
    LongBreak,
}

impl TimerMode {
    /// All modes, in display order.
    pub const ALL: [TimerMode; 3] = [
        TimerMode::Pomodoro,
        TimerMode::ShortBreak,
        TimerMode::LongBreak,
    ];

    /// Returns the canonical name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "pomodoro",
            TimerMode::ShortBreak => "shortBreak",
            TimerMode::LongBreak => "longBreak",
        }
    }

    /// Returns a human-readable label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "pomodoro",
            TimerMode::ShortBreak => "short break",
            TimerMode::LongBreak => "long break",
        }
    }

    /// Looks up a mode by its canonical name.
    ///
    /// Returns `None` for anything other than `pomodoro`, `shortBreak` or
    /// `longBreak`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Longest interval in minutes. The clock shows minutes with two digits and
/// wraps them at 60.
pub const MAX_DURATION_MINUTES: u32 = 59;

/// Errors produced by [`TimerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A duration was zero.
    #[error("{field} must be at least 1 minute")]
    ZeroDuration {
        /// Name of the offending field
        field: &'static str,
    },

    /// A duration did not fit the two-digit clock.
    #[error("{field} must be at most {max} minutes")]
    DurationTooLong {
        /// Name of the offending field
        field: &'static str,
        /// Largest accepted value
        max: u32,
    },

    /// The long break interval was zero.
    #[error("long break interval must be at least 1")]
    ZeroLongBreakInterval,
}

/// Durations for each mode and the long break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerConfig {
    /// Work duration in minutes
    pub pomodoro: u32,
    /// Short break duration in minutes
    pub short_break: u32,
    /// Long break duration in minutes
    pub long_break: u32,
    /// Number of pomodoros between long breaks
    pub long_break_interval: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            pomodoro: 25,
            short_break: 5,
            long_break: 15,
            long_break_interval: 4,
        }
    }
}

impl TimerConfig {
    /// Sets the pomodoro duration.
    pub fn with_pomodoro(mut self, minutes: u32) -> Self {
        self.pomodoro = minutes;
        self
    }

    /// Sets the short break duration.
    pub fn with_short_break(mut self, minutes: u32) -> Self {
        self.short_break = minutes;
        self
    }

    /// Sets the long break duration.
    pub fn with_long_break(mut self, minutes: u32) -> Self {
        self.long_break = minutes;
        self
    }

    /// Sets the number of pomodoros between long breaks.
    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval;
        self
    }

    /// Returns the configured duration of `mode` in minutes.
    pub fn minutes_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Pomodoro => self.pomodoro,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, minutes) in [
            ("pomodoro", self.pomodoro),
            ("short break", self.short_break),
            ("long break", self.long_break),
        ] {
            if minutes == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
            if minutes > MAX_DURATION_MINUTES {
                return Err(ConfigError::DurationTooLong {
                    field,
                    max: MAX_DURATION_MINUTES,
                });
            }
        }
        if self.long_break_interval == 0 {
            return Err(ConfigError::ZeroLongBreakInterval);
        }
        Ok(())
    }
}

// ============================================================================
// Remaining
// ============================================================================

/// Time left in the current interval.
///
/// `minutes` and `seconds` are `total_seconds` decomposed with truncating
/// division, so they are only meaningful for non-negative totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remaining {
    /// Whole seconds left; negative once the deadline has passed
    pub total_seconds: i64,
    /// Minutes component, `(total / 60) % 60`
    pub minutes: i64,
    /// Seconds component, `total % 60`
    pub seconds: i64,
}

impl Remaining {
    /// Decomposes a total number of seconds.
    pub fn from_total_seconds(total_seconds: i64) -> Self {
        Self {
            total_seconds,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }

    /// The freshly reset value for an interval of `minutes` minutes.
    pub fn full(minutes: u32) -> Self {
        Self {
            total_seconds: i64::from(minutes) * 60,
            minutes: i64::from(minutes),
            seconds: 0,
        }
    }

    /// Returns true once no time is left.
    pub fn is_elapsed(&self) -> bool {
        self.total_seconds <= 0
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The mutable countdown state owned by the mode controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Active interval kind
    pub mode: TimerMode,
    /// Time left in the active interval
    pub remaining: Remaining,
    /// Pomodoro intervals started so far
    pub sessions_completed: u32,
    /// Whether the countdown is ticking
    pub running: bool,
}

impl TimerState {
    /// Creates a stopped state in pomodoro mode with a full interval.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            remaining: Remaining::full(config.pomodoro),
            sessions_completed: 0,
            running: false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerMode Tests
    // ------------------------------------------------------------------------

    mod timer_mode_tests {
        use super::*;

        #[test]
        fn test_default_is_pomodoro() {
            assert_eq!(TimerMode::default(), TimerMode::Pomodoro);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(TimerMode::Pomodoro.as_str(), "pomodoro");
            assert_eq!(TimerMode::ShortBreak.as_str(), "shortBreak");
            assert_eq!(TimerMode::LongBreak.as_str(), "longBreak");
        }

        #[test]
        fn test_from_name_known() {
            for mode in TimerMode::ALL {
                assert_eq!(TimerMode::from_name(mode.as_str()), Some(mode));
            }
        }

        #[test]
        fn test_from_name_unknown() {
            assert_eq!(TimerMode::from_name(""), None);
            assert_eq!(TimerMode::from_name("short_break"), None);
            assert_eq!(TimerMode::from_name("Pomodoro"), None);
        }

        #[test]
        fn test_serde_names_match_as_str() {
            let json = serde_json::to_string(&TimerMode::ShortBreak).unwrap();
            assert_eq!(json, "\"shortBreak\"");

            let mode: TimerMode = serde_json::from_str("\"longBreak\"").unwrap();
            assert_eq!(mode, TimerMode::LongBreak);
        }

        #[test]
        fn test_display() {
            assert_eq!(TimerMode::LongBreak.to_string(), "longBreak");
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.pomodoro, 25);
            assert_eq!(config.short_break, 5);
            assert_eq!(config.long_break, 15);
            assert_eq!(config.long_break_interval, 4);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_pomodoro(50)
                .with_short_break(10)
                .with_long_break(30)
                .with_long_break_interval(2);

            assert_eq!(config.pomodoro, 50);
            assert_eq!(config.short_break, 10);
            assert_eq!(config.long_break, 30);
            assert_eq!(config.long_break_interval, 2);
        }

        #[test]
        fn test_minutes_for() {
            let config = TimerConfig::default();
            assert_eq!(config.minutes_for(TimerMode::Pomodoro), 25);
            assert_eq!(config.minutes_for(TimerMode::ShortBreak), 5);
            assert_eq!(config.minutes_for(TimerMode::LongBreak), 15);
        }

        #[test]
        fn test_validate_minimum_values() {
            let config = TimerConfig {
                pomodoro: 1,
                short_break: 1,
                long_break: 1,
                long_break_interval: 1,
            };
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_zero_pomodoro() {
            let config = TimerConfig::default().with_pomodoro(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroDuration { field: "pomodoro" })
            );
        }

        #[test]
        fn test_validate_zero_short_break() {
            let config = TimerConfig::default().with_short_break(0);
            let err = config.validate().unwrap_err();
            assert_eq!(err.to_string(), "short break must be at least 1 minute");
        }

        #[test]
        fn test_validate_zero_long_break() {
            let config = TimerConfig::default().with_long_break(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_maximum_values() {
            let config = TimerConfig::default()
                .with_pomodoro(59)
                .with_short_break(59)
                .with_long_break(59);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_pomodoro_past_an_hour() {
            let config = TimerConfig::default().with_pomodoro(100);
            assert_eq!(
                config.validate(),
                Err(ConfigError::DurationTooLong {
                    field: "pomodoro",
                    max: 59
                })
            );
        }

        #[test]
        fn test_validate_long_break_of_an_hour() {
            let config = TimerConfig::default().with_long_break(60);
            let err = config.validate().unwrap_err();
            assert_eq!(err.to_string(), "long break must be at most 59 minutes");
        }

        #[test]
        fn test_validate_zero_interval() {
            let config = TimerConfig::default().with_long_break_interval(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::ZeroLongBreakInterval)
            );
        }
    }

    // ------------------------------------------------------------------------
    // Remaining Tests
    // ------------------------------------------------------------------------

    mod remaining_tests {
        use super::*;

        #[test]
        fn test_full() {
            let remaining = Remaining::full(25);
            assert_eq!(remaining.total_seconds, 1500);
            assert_eq!(remaining.minutes, 25);
            assert_eq!(remaining.seconds, 0);
        }

        #[test]
        fn test_full_longest_interval() {
            let remaining = Remaining::full(MAX_DURATION_MINUTES);
            assert_eq!(remaining.total_seconds, 3540);
            assert_eq!(remaining, Remaining::from_total_seconds(3540));
        }

        #[test]
        fn test_from_total_seconds() {
            let remaining = Remaining::from_total_seconds(1499);
            assert_eq!(remaining.minutes, 24);
            assert_eq!(remaining.seconds, 59);
        }

        #[test]
        fn test_from_total_seconds_wraps_minutes_at_an_hour() {
            let remaining = Remaining::from_total_seconds(3600 + 61);
            assert_eq!(remaining.minutes, 1);
            assert_eq!(remaining.seconds, 1);
        }

        #[test]
        fn test_from_negative_truncates_toward_zero() {
            let remaining = Remaining::from_total_seconds(-61);
            assert_eq!(remaining.minutes, -1);
            assert_eq!(remaining.seconds, -1);
        }

        #[test]
        fn test_is_elapsed() {
            assert!(!Remaining::from_total_seconds(1).is_elapsed());
            assert!(Remaining::from_total_seconds(0).is_elapsed());
            assert!(Remaining::from_total_seconds(-3).is_elapsed());
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let state = TimerState::new(&TimerConfig::default());
            assert_eq!(state.mode, TimerMode::Pomodoro);
            assert_eq!(state.remaining, Remaining::full(25));
            assert_eq!(state.sessions_completed, 0);
            assert!(!state.running);
        }

        #[test]
        fn test_serialize_field_names() {
            let state = TimerState::new(&TimerConfig::default());
            let json = serde_json::to_value(&state).unwrap();
            assert_eq!(json["mode"], "pomodoro");
            assert_eq!(json["remaining"]["totalSeconds"], 1500);
            assert_eq!(json["sessionsCompleted"], 0);
            assert_eq!(json["running"], false);
        }
    }
}
