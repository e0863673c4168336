//! Display utilities for the Pomodoro Clock CLI.
//!
//! This module provides:
//! - The [`Renderer`] collaborator the session draws the clock through
//! - A single-line terminal renderer and a JSON-lines renderer
//! - One-off messages (welcome, errors)

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::clock::format;
use crate::types::{Remaining, TimerMode};

/// ANSI sequence returning to column 0 and clearing the line.
const CLEAR_LINE: &str = "\r\x1b[2K";

// ============================================================================
// Renderer
// ============================================================================

/// Draws the clock. Implementations only read the values they are given.
pub trait Renderer {
    /// Marks `mode` as the active one, clearing the previous selection.
    fn highlight(&self, mode: TimerMode) -> io::Result<()>;

    /// Draws the remaining time of the active mode.
    fn render(&self, remaining: &Remaining, mode: TimerMode) -> io::Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for Arc<T> {
    fn highlight(&self, mode: TimerMode) -> io::Result<()> {
        (**self).highlight(mode)
    }

    fn render(&self, remaining: &Remaining, mode: TimerMode) -> io::Result<()> {
        (**self).render(remaining, mode)
    }
}

/// Builds the text line for a render: the mode bar followed by `MM:SS`.
///
/// The active mode is wrapped in brackets.
pub fn render_line(remaining: &Remaining, mode: TimerMode) -> String {
    let bar = TimerMode::ALL
        .iter()
        .map(|m| {
            if *m == mode {
                format!("[{}]", m.label())
            } else {
                format!(" {} ", m.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}  {}", bar, format(remaining))
}

// ============================================================================
// TerminalRenderer
// ============================================================================

/// Redraws a single terminal line in place.
pub struct TerminalRenderer {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalRenderer {
    /// Creates a renderer drawing on stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Creates a renderer drawing on `out`.
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn highlight(&self, _mode: TimerMode) -> io::Result<()> {
        // Keep the finished interval's last line on screen.
        self.write("\n")
    }

    fn render(&self, remaining: &Remaining, mode: TimerMode) -> io::Result<()> {
        self.write(&format!("{}{}", CLEAR_LINE, render_line(remaining, mode)))
    }
}

// ============================================================================
// JsonRenderer
// ============================================================================

/// One render as emitted by [`JsonRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRecord {
    /// Active mode
    pub mode: TimerMode,
    /// Clamped `MM:SS`
    pub display: String,
    /// Raw seconds left
    pub total_seconds: i64,
    /// Minutes component
    pub minutes: i64,
    /// Seconds component
    pub seconds: i64,
}

impl RenderRecord {
    pub fn new(remaining: &Remaining, mode: TimerMode) -> Self {
        Self {
            mode,
            display: format(remaining).to_string(),
            total_seconds: remaining.total_seconds,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
        }
    }
}

/// Prints one JSON object per render, for status bars and scripts.
pub struct JsonRenderer {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonRenderer {
    /// Creates a renderer printing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Creates a renderer printing to `out`.
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn highlight(&self, _mode: TimerMode) -> io::Result<()> {
        // Every record already carries its mode.
        Ok(())
    }

    fn render(&self, remaining: &Remaining, mode: TimerMode) -> io::Result<()> {
        let line = serde_json::to_string(&RenderRecord::new(remaining, mode))?;
        let mut out = self
            .out
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

// ============================================================================
// MockRenderer
// ============================================================================

/// A call recorded by [`MockRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Highlight(TimerMode),
    Render(Remaining, TimerMode),
}

/// Mock renderer for testing.
#[derive(Debug, Default)]
pub struct MockRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

impl MockRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the most recent render, if any.
    #[must_use]
    pub fn last_render(&self) -> Option<(Remaining, TimerMode)> {
        self.calls.lock().unwrap().iter().rev().find_map(|c| match c {
            RenderCall::Render(remaining, mode) => Some((*remaining, *mode)),
            RenderCall::Highlight(_) => None,
        })
    }
}

impl Renderer for MockRenderer {
    fn highlight(&self, mode: TimerMode) -> io::Result<()> {
        self.calls.lock().unwrap().push(RenderCall::Highlight(mode));
        Ok(())
    }

    fn render(&self, remaining: &Remaining, mode: TimerMode) -> io::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(RenderCall::Render(*remaining, mode));
        Ok(())
    }
}

// ============================================================================
// Display
// ============================================================================

/// One-off CLI messages.
pub struct Display;

impl Display {
    /// Shows the controls at the start of a session.
    pub fn show_welcome() {
        println!("Pomodoro Clock");
        println!("─────────────────────────────");
        println!("Enter         toggle");
        println!("start|stop    start or stop");
        println!("p|short|long  switch mode");
        println!("q             quit");
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================
