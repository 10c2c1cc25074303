//! Traits implemented by audio backends.

use std::time::Duration;

use crate::error::{OutputError, SessionError};

use super::resolve::AudioAsset;

/// A loaded, ready-to-render track.
///
/// Dropping a handle must silence it.
pub trait AudioHandle {
    fn play(&mut self);
    fn pause(&mut self);
    /// Move the playback cursor. Does not change play/pause state.
    fn seek(&mut self, to: Duration) -> Result<(), OutputError>;
    /// Reload the track at position zero, paused. Works after the end was reached.
    fn rewind(&mut self) -> Result<(), OutputError>;
    /// Live cursor position as reported by the output.
    fn position(&self) -> Duration;
    /// Decoded length, when the decoder knows it.
    fn duration(&self) -> Option<Duration>;
    /// True once everything queued has been rendered.
    fn is_finished(&self) -> bool;
    fn stop(&mut self);
}

/// Host audio output: session setup plus a factory for handles.
pub trait AudioOutput {
    type Handle: AudioHandle;

    /// Select the output for media playback. Idempotent.
    fn configure_for_playback(&mut self) -> Result<(), SessionError>;
    /// Open the configured output. Idempotent once active.
    fn activate(&mut self) -> Result<(), SessionError>;
    /// Decode `asset` into a paused handle on the active session.
    fn load(&mut self, asset: &AudioAsset) -> Result<Self::Handle, OutputError>;
}
