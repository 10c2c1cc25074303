//! State-change notification.
//!
//! The controller hands a fresh `PlaybackSnapshot` to every registered
//! observer after each mutation.

use std::sync::{Arc, Mutex};

use super::types::PlaybackSnapshot;

pub trait PlaybackObserver {
    fn on_change(&mut self, snapshot: &PlaybackSnapshot);
}

/// Latest snapshot, shared with the view layer.
pub type SnapshotHandle = Arc<Mutex<PlaybackSnapshot>>;

impl PlaybackObserver for SnapshotHandle {
    fn on_change(&mut self, snapshot: &PlaybackSnapshot) {
        if let Ok(mut s) = self.lock() {
            *s = snapshot.clone();
        }
    }
}

/// Logs transitions. Play/pause and loop changes are `info`, position-only
/// updates are `trace`.
#[derive(Debug, Default)]
pub struct LogObserver {
    last: Option<PlaybackSnapshot>,
}

impl PlaybackObserver for LogObserver {
    fn on_change(&mut self, snapshot: &PlaybackSnapshot) {
        let prev = self.last.replace(snapshot.clone());
        let Some(prev) = prev else {
            log::debug!("playback state {:?}", snapshot.state);
            return;
        };

        if prev.state != snapshot.state {
            log::info!("playback {:?} -> {:?}", prev.state, snapshot.state);
        }
        if prev.is_playing != snapshot.is_playing {
            log::info!("is_playing {}", snapshot.is_playing);
        }
        if prev.is_looping != snapshot.is_looping {
            log::info!("is_looping {}", snapshot.is_looping);
        }
        if prev.duration != snapshot.duration {
            log::debug!("duration {:.1}s", snapshot.duration.as_secs_f64());
        }
        if prev.position != snapshot.position {
            log::trace!("position {:.1}s", snapshot.position.as_secs_f64());
        }
    }
}
