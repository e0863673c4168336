//! Mode controller for the Pomodoro Clock.
//!
//! This module owns the countdown state machine:
//! - Mode switching (pomodoro → short/long break → pomodoro)
//! - Deadline-based ticking
//! - Session counting for the long break cadence
//! - Side-effect requests (render, notify, sound) sent as [`TimerEvent`]s

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::clock::{compute_remaining, Clock, SystemClock};
use crate::notification::message_for;
use crate::types::{Remaining, TimerConfig, TimerMode, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The active mode changed; highlight it and clear the previous selection
    ModeChanged {
        /// The new active mode
        mode: TimerMode,
    },
    /// The displayed time should be redrawn
    Render {
        /// Time left
        remaining: Remaining,
        /// Active mode
        mode: TimerMode,
    },
    /// Play the boundary cue for a mode
    PlayCue {
        /// The mode that just began
        mode: TimerMode,
    },
    /// Show a desktop notification
    Notify {
        /// The mode that just began
        mode: TimerMode,
        /// Notification body
        message: String,
    },
}

// ============================================================================
// ModeController
// ============================================================================

/// Owns the [`TimerState`] and drives every transition.
pub struct ModeController<C: Clock = SystemClock> {
    config: TimerConfig,
    state: TimerState,
    /// Deadline in epoch milliseconds while running
    end_timestamp: Option<i64>,
    clock: C,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl ModeController<SystemClock> {
    /// Creates a controller on the wall clock.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self::with_clock(config, SystemClock, event_tx)
    }
}

impl<C: Clock> ModeController<C> {
    /// Creates a controller reading time from `clock`.
    pub fn with_clock(
        config: TimerConfig,
        clock: C,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        Self {
            state: TimerState::new(&config),
            config,
            end_timestamp: None,
            clock,
            event_tx,
        }
    }

    /// Stops any countdown and resets the clock to a full `target` interval.
    pub fn switch_mode(&mut self, target: TimerMode) {
        self.halt();
        self.state.mode = target;
        self.state.remaining = Remaining::full(self.config.minutes_for(target));
        debug!(mode = %target, "Switched mode");

        self.emit(TimerEvent::ModeChanged { mode: target });
        self.emit_render();
    }

    /// Switches to the mode called `name`.
    ///
    /// Unknown names are ignored.
    pub fn select_mode(&mut self, name: &str) {
        match TimerMode::from_name(name) {
            Some(mode) => self.switch_mode(mode),
            None => debug!(name, "Ignoring unknown mode"),
        }
    }

    /// Starts counting down what is left of the current interval.
    ///
    /// Starting a pomodoro counts it as a session right away, so a pomodoro
    /// that is stopped and started again is counted twice.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }

        let now = self.clock.now_millis();
        self.end_timestamp = Some(now + self.state.remaining.total_seconds * 1000);

        if self.state.mode == TimerMode::Pomodoro {
            self.state.sessions_completed += 1;
        }
        self.state.running = true;
        debug!(
            mode = %self.state.mode,
            sessions = self.state.sessions_completed,
            "Countdown started"
        );

        self.emit_render();
    }

    /// Recomputes the remaining time and completes the interval when it runs out.
    ///
    /// Returns true if the interval completed on this tick.
    pub fn tick(&mut self) -> bool {
        let Some(end) = self.end_timestamp.filter(|_| self.state.running) else {
            return false;
        };

        self.state.remaining = compute_remaining(end, self.clock.now_millis());
        self.emit_render();

        if !self.state.remaining.is_elapsed() {
            return false;
        }

        self.halt();
        let next = self.next_mode();
        info!(from = %self.state.mode, to = %next, "Interval completed");
        self.switch_mode(next);

        self.emit(TimerEvent::PlayCue { mode: next });
        self.emit(TimerEvent::Notify {
            mode: next,
            message: message_for(next).to_string(),
        });
        true
    }

    /// Pauses the countdown, keeping the remaining time.
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }

        self.halt();
        debug!(remaining = self.state.remaining.total_seconds, "Countdown stopped");
        self.emit_render();
    }

    /// Starts when stopped, stops when running.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Returns the mode that follows completion of the current one.
    fn next_mode(&self) -> TimerMode {
        match self.state.mode {
            TimerMode::Pomodoro => {
                if self.state.sessions_completed % self.config.long_break_interval.max(1) == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Pomodoro,
        }
    }

    fn halt(&mut self) {
        self.state.running = false;
        self.end_timestamp = None;
    }

    fn emit_render(&self) {
        self.emit(TimerEvent::Render {
            remaining: self.state.remaining,
            mode: self.state.mode,
        });
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }

    /// Returns the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns true while the countdown is ticking.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Returns the deadline of the running countdown.
    pub fn end_timestamp(&self) -> Option<i64> {
        self.end_timestamp
    }
}

// ============================================================================
// Tests
// ============================================================================
