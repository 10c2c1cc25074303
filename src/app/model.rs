//! Application model types: `App` and `Screen`.

use std::time::Duration;

use crate::playback::{self, PlaybackSnapshot, SeekGesture, SnapshotHandle};
use crate::track::TrackRecord;

/// Which screen is showing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Artwork, title, description and a play button.
    #[default]
    Detail,
    /// Full-screen transport controls.
    Player,
}

/// The main application model.
pub struct App {
    pub track: TrackRecord,
    pub screen: Screen,
    /// Latest state published by the playback controller.
    pub playback_handle: SnapshotHandle,
    pub gesture: SeekGesture,
    /// Last error or notice, shown in the status line.
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` showing `track` on the detail screen.
    pub fn new(track: TrackRecord, playback_handle: SnapshotHandle) -> Self {
        Self {
            track,
            screen: Screen::Detail,
            playback_handle,
            gesture: SeekGesture::default(),
            status: None,
        }
    }

    /// Copy of the latest published playback state.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.playback_handle
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn open_player(&mut self) {
        self.screen = Screen::Player;
    }

    /// Leave the player. Any scrub in progress is abandoned.
    pub fn close_player(&mut self) {
        self.screen = Screen::Detail;
        self.gesture.cancel();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Start scrubbing from the published position.
    pub fn begin_scrub(&mut self) {
        let snap = self.snapshot();
        self.gesture.begin(snap.position.as_secs_f64());
    }

    /// Move the pending scrub value, bounded by the published duration.
    pub fn nudge_scrub(&mut self, delta_secs: f64) {
        let max = self.snapshot().duration.as_secs_f64();
        self.gesture.nudge(delta_secs, max);
    }

    /// Position to draw: the scrub value while scrubbing, else the published one.
    pub fn displayed_position(&self, snap: &PlaybackSnapshot) -> Duration {
        match self.gesture.value() {
            Some(v) => Duration::from_secs_f64(v.max(0.0)),
            None => snap.position,
        }
    }

    /// Duration to draw: the decoded one once loaded, the record's before that.
    pub fn displayed_duration(&self, snap: &PlaybackSnapshot) -> Duration {
        if snap.is_loaded() && !snap.duration.is_zero() {
            snap.duration
        } else {
            self.track.duration()
        }
    }

    /// Fill ratio for the timeline gauge.
    pub fn displayed_progress(&self, snap: &PlaybackSnapshot) -> f64 {
        playback::progress(self.displayed_position(snap), self.displayed_duration(snap))
    }
}
