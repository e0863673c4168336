//! Sound system error types.

use thiserror::Error;

/// Errors that can occur while playing a cue.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to create the audio output stream.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// Generic playback error.
    #[error("sound playback failed: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) => "connect an audio output device",
            Self::StreamError(_) => "check the audio settings",
            Self::PlaybackError(_) => "run with --no-sound to silence cues",
        }
    }
}

impl From<std::io::Error> for SoundError {
    fn from(err: std::io::Error) -> Self {
        Self::PlaybackError(err.to_string())
    }
}
