//! Clock engine for the Pomodoro Clock.
//!
//! Pure time arithmetic:
//! - Remaining time from a fixed deadline
//! - Zero-padded `MM:SS` formatting
//! - A [`Clock`] seam so deadlines can be driven by a fake time source

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::types::Remaining;

// ============================================================================
// Remaining Time
// ============================================================================

/// Computes the time left until `end_ms` as seen at `now_ms`.
///
/// Both arguments are milliseconds since the Unix epoch. The total is floored,
/// so half a second past the deadline is already `-1`. The result is not
/// clamped; callers decide what a non-positive total means.
pub fn compute_remaining(end_ms: i64, now_ms: i64) -> Remaining {
    let total_seconds = (end_ms - now_ms).div_euclid(1000);
    Remaining::from_total_seconds(total_seconds)
}

// ============================================================================
// Formatting
// ============================================================================

/// Display strings for a [`Remaining`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    /// Two-digit minutes
    pub minutes: String,
    /// Two-digit seconds
    pub seconds: String,
}

impl std::fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Formats minutes and seconds as zero-padded two-digit strings.
///
/// Negative components render as `00`.
pub fn format(remaining: &Remaining) -> FormattedTime {
    FormattedTime {
        minutes: pad(remaining.minutes),
        seconds: pad(remaining.seconds),
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value.max(0))
}

// ============================================================================
// Clock
// ============================================================================

/// Source of the current wall-clock time in epoch milliseconds.
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A hand-driven clock.
///
/// Clones share the same time, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `now_ms`.
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now_ms)),
        }
    }

    /// Moves the clock to `now_ms`.
    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
