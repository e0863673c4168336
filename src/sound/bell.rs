//! Terminal bell fallback for machines without an audio device.
//!
//! Bells go to stderr. Stdout belongs to the renderer, and a bell byte there
//! would corrupt JSON output.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::debug;

use super::cue::Cue;
use super::error::SoundError;
use super::SoundPlayer;
use crate::types::TimerMode;

const BEL: u8 = 0x07;

/// Rings the terminal bell once per beep of the cue.
pub struct BellSoundPlayer {
    out: Mutex<Box<dyn Write + Send>>,
    disabled: AtomicBool,
}

impl BellSoundPlayer {
    /// Creates a player ringing the bell on stderr.
    #[must_use]
    pub fn new(disabled: bool) -> Self {
        Self::with_writer(Box::new(io::stderr()), disabled)
    }

    /// Creates a player writing bell characters to `out`.
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>, disabled: bool) -> Self {
        Self {
            out: Mutex::new(out),
            disabled: AtomicBool::new(disabled),
        }
    }
}

impl SoundPlayer for BellSoundPlayer {
    fn play_cue(&self, mode: TimerMode) -> Result<(), SoundError> {
        if self.is_disabled() {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        let bells = vec![BEL; usize::from(Cue::for_mode(mode).repeats)];
        let mut out = self
            .out
            .lock()
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;
        out.write_all(&bells)?;
        out.flush()?;
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for BellSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BellSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
