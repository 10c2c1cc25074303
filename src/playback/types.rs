//! Published playback state.

use std::time::Duration;

use crate::track::TrackId;

/// Controller state as seen by the UI.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded.
    #[default]
    Idle,
    Playing,
    Paused,
}

/// A copy of everything the controller publishes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub track: Option<TrackId>,
    pub is_playing: bool,
    pub is_looping: bool,
    pub position: Duration,
    pub duration: Duration,
}

impl PlaybackSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.state != PlaybackState::Idle
    }
}

/// `position` as a fraction of `duration`, in `[0, 1]`. Zero when the
/// duration is unknown.
pub fn progress(position: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
