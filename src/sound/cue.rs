//! Boundary cues for each mode.

use std::time::Duration;

use crate::types::TimerMode;

/// Length of a single beep.
pub const BEEP_DURATION: Duration = Duration::from_millis(250);

/// Silence between repeated beeps.
pub const BEEP_GAP: Duration = Duration::from_millis(150);

/// The sound announcing that a mode has begun.
///
/// Pomodoros get one high beep; breaks get more, lower beeps so the two are
/// distinguishable without looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Tone frequency in hertz
    pub frequency_hz: f32,
    /// Number of beeps
    pub repeats: u8,
}

impl Cue {
    /// Returns the cue for `mode`.
    #[must_use]
    pub fn for_mode(mode: TimerMode) -> Self {
        match mode {
            TimerMode::Pomodoro => Self {
                frequency_hz: 880.0,
                repeats: 1,
            },
            TimerMode::ShortBreak => Self {
                frequency_hz: 660.0,
                repeats: 2,
            },
            TimerMode::LongBreak => Self {
                frequency_hz: 440.0,
                repeats: 3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_table() {
        assert_eq!(Cue::for_mode(TimerMode::Pomodoro).repeats, 1);
        assert_eq!(Cue::for_mode(TimerMode::ShortBreak).repeats, 2);
        assert_eq!(Cue::for_mode(TimerMode::LongBreak).repeats, 3);
        assert_eq!(Cue::for_mode(TimerMode::Pomodoro).frequency_hz, 880.0);
    }
}
