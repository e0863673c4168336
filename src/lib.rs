//! Pomodoro Clock Library
//!
//! This library provides the core functionality for the Pomodoro Clock CLI.
//! It includes:
//! - Type definitions for modes, configuration and timer state
//! - Clock engine for deadline-based remaining time and formatting
//! - Mode controller driving the pomodoro/break state machine
//! - Interactive session loop dispatching input, ticks and side effects
//! - Desktop notifications and sound cues at interval boundaries
//! - CLI command parsing, input parsing and display utilities

pub mod cli;
pub mod clock;
pub mod controller;
pub mod notification;
pub mod session;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{ConfigError, Remaining, TimerConfig, TimerMode, TimerState};

pub use clock::{compute_remaining, format, Clock, FormattedTime, ManualClock, SystemClock};

pub use controller::{ModeController, TimerEvent};

pub use session::{Collaborators, InputEvent, Session};

// Re-export collaborator types
pub use cli::display::{JsonRenderer, MockRenderer, Renderer, TerminalRenderer};

pub use notification::{DesktopNotifier, MockNotifier, NotificationError, Notifier};

pub use sound::{try_create_player, BellSoundPlayer, Cue, MockSoundPlayer, SoundError, SoundPlayer};
