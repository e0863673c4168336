//! Parsing of interactive input lines.
//!
//! Each line typed during a session maps to at most one [`InputEvent`]:
//!
//! | Input                                   | Event                   |
//! |-----------------------------------------|-------------------------|
//! | empty line, `s`, `toggle`               | `Toggle`                |
//! | `start`                                 | `Start`                 |
//! | `stop`                                  | `Stop`                  |
//! | `pomodoro`, `p`                         | `SelectMode(Pomodoro)`  |
//! | `shortBreak`, `short`, `sb`             | `SelectMode(ShortBreak)`|
//! | `longBreak`, `long`, `lb`               | `SelectMode(LongBreak)` |
//! | `q`, `quit`, `exit`                     | `Quit`                  |
//!
//! Anything else is ignored.

use crate::session::InputEvent;
use crate::types::TimerMode;

/// Parses one input line.
///
/// Returns `None` for unrecognized input.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let word = line.trim();

    if let Some(mode) = TimerMode::from_name(word) {
        return Some(InputEvent::SelectMode(mode));
    }

    match word.to_ascii_lowercase().as_str() {
        "" | "s" | "toggle" => Some(InputEvent::Toggle),
        "start" => Some(InputEvent::Start),
        "stop" => Some(InputEvent::Stop),
        "p" => Some(InputEvent::SelectMode(TimerMode::Pomodoro)),
        "short" | "sb" => Some(InputEvent::SelectMode(TimerMode::ShortBreak)),
        "long" | "lb" => Some(InputEvent::SelectMode(TimerMode::LongBreak)),
        "q" | "quit" | "exit" => Some(InputEvent::Quit),
        _ => None,
    }
}
