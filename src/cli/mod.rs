//! CLI module for the Pomodoro Clock.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Parsing of interactive input lines
//! - `display`: Renderers and output formatting

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands, OutputFormat, RunArgs};
pub use display::{Display, JsonRenderer, MockRenderer, Renderer, TerminalRenderer};
pub use input::parse_line;
