//! Command definitions for the Pomodoro Clock CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Clock - a terminal study timer
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-clock",
    version,
    about = "A terminal pomodoro study timer",
    long_about = "Counts down work and break intervals in the terminal.\n\
                  Press Enter to toggle the clock or type `start`/`stop`, \
                  `pomodoro`, `short` or `long` to switch modes, and `quit` to exit.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run an interactive timer session
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// How the clock is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A single updating line for humans
    #[default]
    Text,
    /// One JSON object per update, for status bars
    Json,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Pomodoro duration in minutes (1-59)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=59)
    )]
    pub pomodoro: u32,

    /// Short break duration in minutes (1-59)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=59)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-59)
    #[arg(
        short,
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=59)
    )]
    pub long_break: u32,

    /// Number of pomodoros between long breaks
    #[arg(
        short = 'i',
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub long_break_interval: u32,

    /// Disable sound cues
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            pomodoro: 25,
            short_break: 5,
            long_break: 15,
            long_break_interval: 4,
            no_sound: false,
            no_notify: false,
            output: OutputFormat::Text,
        }
    }
}

impl RunArgs {
    /// Builds the timer configuration from the duration flags.
    pub fn to_config(&self) -> TimerConfig {
        TimerConfig {
            pomodoro: self.pomodoro,
            short_break: self.short_break,
            long_break: self.long_break,
            long_break_interval: self.long_break_interval,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
