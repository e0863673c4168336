//! Sound cues for the Pomodoro Clock.
//!
//! Each interval boundary plays a short [`Cue`] for the mode that begins:
//!
//! - `RodioSoundPlayer` synthesizes the tone (requires the `audio` feature)
//! - `BellSoundPlayer` rings the terminal bell as a fallback
//! - `MockSoundPlayer` records calls for tests
//!
//! Playback is best-effort. A missing audio device degrades to the bell, and
//! playback errors are logged by the caller and otherwise ignored.

mod bell;
mod cue;
mod error;
#[cfg(feature = "audio")]
mod player;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[cfg(feature = "audio")]
use tracing::warn;

pub use bell::BellSoundPlayer;
pub use cue::{Cue, BEEP_DURATION, BEEP_GAP};
pub use error::SoundError;
#[cfg(feature = "audio")]
pub use player::RodioSoundPlayer;

use crate::types::TimerMode;

/// Trait for sound playback implementations.
pub trait SoundPlayer {
    /// Plays the cue announcing that `mode` has begun.
    ///
    /// This method should be non-blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play_cue(&self, mode: TimerMode) -> Result<(), SoundError>;

    /// Returns true if sound playback is disabled.
    fn is_disabled(&self) -> bool;
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Arc<T> {
    fn play_cue(&self, mode: TimerMode) -> Result<(), SoundError> {
        (**self).play_cue(mode)
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

/// Creates the best available player.
///
/// With the `audio` feature this tries rodio first and falls back to the
/// terminal bell when no output device exists.
#[must_use]
pub fn try_create_player(disabled: bool) -> Box<dyn SoundPlayer> {
    #[cfg(feature = "audio")]
    {
        match RodioSoundPlayer::new(disabled) {
            Ok(player) => return Box::new(player),
            Err(e) => warn!("Audio not available, falling back to terminal bell: {}", e),
        }
    }

    Box::new(BellSoundPlayer::new(disabled))
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<TimerMode>>,
    should_fail: AtomicBool,
    disabled: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<TimerMode> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play_cue(&self, mode: TimerMode) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(mode);
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }
}
