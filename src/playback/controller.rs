//! The playback controller.
//!
//! Owns at most one loaded resource and the published play/loop/position
//! state. Every operation is synchronous; the audio itself renders on the
//! backend's own thread.
//!
//! States: `Idle` (nothing loaded), `Playing`, `Paused`. `start` always
//! releases the previous resource before creating the next one, and any
//! failure on the way leaves the controller `Idle`.

use std::time::Duration;

use crate::audio::{AssetResolver, AudioHandle, AudioOutput};
use crate::error::PlaybackError;
use crate::track::TrackRecord;

use super::observer::PlaybackObserver;
use super::types::{PlaybackSnapshot, PlaybackState};

struct Loaded<H> {
    track: TrackRecord,
    handle: H,
}

pub struct PlaybackController<O: AudioOutput, R: AssetResolver> {
    output: O,
    resolver: R,
    loaded: Option<Loaded<O::Handle>>,
    is_playing: bool,
    is_looping: bool,
    position: Duration,
    duration: Duration,
    observers: Vec<Box<dyn PlaybackObserver>>,
}

/// Clamp a seconds value into `[0, max]`. NaN maps to zero.
fn clamp_secs(secs: f64, max: Duration) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    if secs >= max.as_secs_f64() {
        return max;
    }
    Duration::from_secs_f64(secs)
}

impl<O: AudioOutput, R: AssetResolver> PlaybackController<O, R> {
    pub fn new(output: O, resolver: R) -> Self {
        Self {
            output,
            resolver,
            loaded: None,
            is_playing: false,
            is_looping: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It receives a snapshot after every mutation.
    pub fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>) {
        self.observers.push(observer);
    }

    /// Load `track` and start playing it from the beginning.
    pub fn start(&mut self, track: TrackRecord) -> Result<(), PlaybackError> {
        self.load(track, true)
    }

    /// Load `track` without starting output. Play with `play_pause`.
    pub fn prepare(&mut self, track: TrackRecord) -> Result<(), PlaybackError> {
        self.load(track, false)
    }

    pub fn play_pause(&mut self) -> Result<(), PlaybackError> {
        let loaded = self
            .loaded
            .as_mut()
            .ok_or(PlaybackError::NoActiveResource)?;

        if self.is_playing {
            loaded.handle.pause();
            self.is_playing = false;
        } else {
            loaded.handle.play();
            self.is_playing = true;
        }

        self.notify();
        Ok(())
    }

    /// Move to `secs`, clamped to the track. Play/pause state is unchanged.
    pub fn seek(&mut self, secs: f64) -> Result<(), PlaybackError> {
        let target = clamp_secs(secs, self.duration);
        let loaded = self
            .loaded
            .as_mut()
            .ok_or(PlaybackError::NoActiveResource)?;

        loaded.handle.seek(target)?;
        self.position = target;

        self.notify();
        Ok(())
    }

    /// Seek relative to the current position.
    pub fn skip(&mut self, delta_secs: f64) -> Result<(), PlaybackError> {
        self.seek(self.position.as_secs_f64() + delta_secs)
    }

    /// Flip looping. Applies at the next end of track.
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.notify();
    }

    /// Release the loaded resource, if any.
    pub fn stop(&mut self) {
        if self.loaded.is_none() {
            return;
        }
        self.release();
        self.notify();
    }

    /// Pull the live position from the resource and publish it.
    ///
    /// This is also where the end of the track is noticed: with looping on
    /// the track restarts from zero and keeps playing, otherwise it is
    /// rewound and left paused at zero. Returns `None` while idle.
    pub fn sync_position(&mut self) -> Option<PlaybackSnapshot> {
        let looping = self.is_looping;
        let loaded = self.loaded.as_mut()?;

        if self.is_playing && loaded.handle.is_finished() {
            match loaded.handle.rewind() {
                Ok(()) => {
                    if looping {
                        loaded.handle.play();
                        log::info!("looping {:?}", loaded.track.title());
                    } else {
                        self.is_playing = false;
                        log::info!("finished {:?}", loaded.track.title());
                    }
                    self.position = Duration::ZERO;
                }
                Err(e) => {
                    log::warn!("could not rewind {:?}: {e}", loaded.track.title());
                    self.release();
                }
            }
        } else {
            self.position = loaded.handle.position().min(self.duration);
        }

        self.notify();
        Some(self.snapshot())
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state(),
            track: self.loaded.as_ref().map(|l| l.track.id()),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            position: self.position,
            duration: self.duration,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.loaded, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The loaded track, if any.
    pub fn track(&self) -> Option<&TrackRecord> {
        self.loaded.as_ref().map(|l| &l.track)
    }

    fn load(&mut self, track: TrackRecord, autoplay: bool) -> Result<(), PlaybackError> {
        // Never hold two resources: the old one goes before the new one is opened.
        self.release();

        let mut handle = match self.open(&track) {
            Ok(h) => h,
            Err(e) => {
                log::warn!("cannot load {:?}: {e}", track.title());
                self.notify();
                return Err(e);
            }
        };

        if autoplay {
            handle.play();
        }
        self.duration = handle
            .duration()
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| track.duration());
        self.position = Duration::ZERO;
        self.is_playing = autoplay;
        log::info!(
            "loaded {:?} ({:.1}s){}",
            track.title(),
            self.duration.as_secs_f64(),
            if autoplay { "" } else { ", paused" }
        );
        self.loaded = Some(Loaded { track, handle });

        self.notify();
        Ok(())
    }

    fn open(&mut self, track: &TrackRecord) -> Result<O::Handle, PlaybackError> {
        let asset = self.resolver.resolve(track.audio_resource())?;
        self.output.configure_for_playback()?;
        self.output.activate()?;
        Ok(self.output.load(&asset)?)
    }

    fn release(&mut self) {
        if let Some(mut loaded) = self.loaded.take() {
            loaded.handle.stop();
            log::debug!("released {:?}", loaded.track.title());
        }
        self.is_playing = false;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for o in self.observers.iter_mut() {
            o.on_change(&snapshot);
        }
    }
}

impl<O: AudioOutput, R: AssetResolver> Drop for PlaybackController<O, R> {
    fn drop(&mut self) {
        self.release();
    }
}
