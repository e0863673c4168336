//! Sound player implementation using rodio.
//!
//! Only built with the `audio` feature.

use std::sync::atomic::{AtomicBool, Ordering};

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::cue::{Cue, BEEP_DURATION, BEEP_GAP};
use super::error::SoundError;
use super::SoundPlayer;
use crate::types::TimerMode;

/// Volume applied to generated tones.
const CUE_AMPLITUDE: f32 = 0.2;

/// A sound player that synthesizes cues with rodio.
///
/// Playback is non-blocking; the tone keeps playing after `play_cue` returns.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn play_cue(&self, mode: TimerMode) -> Result<(), SoundError> {
        if self.is_disabled() {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        let cue = Cue::for_mode(mode);
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        for i in 0..cue.repeats {
            let gap = if i == 0 { Default::default() } else { BEEP_GAP };
            let beep = SineWave::new(cue.frequency_hz)
                .take_duration(BEEP_DURATION)
                .amplify(CUE_AMPLITUDE)
                .delay(gap);
            sink.append(beep);
        }
        sink.detach();

        debug!(mode = %mode, "Cue playback started (detached)");
        Ok(())
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
