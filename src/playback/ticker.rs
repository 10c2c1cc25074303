//! Periodic position sampling.
//!
//! The ticker owns no thread. The event loop polls it with the current time
//! and, once per interval, it asks the controller for its live position.
//! Ticks that fall inside a seek gesture are dropped, and overdue ticks are
//! not replayed: the next one is scheduled from the time of the poll.

use std::time::{Duration, Instant};

use crate::audio::{AssetResolver, AudioOutput};

use super::controller::PlaybackController;
use super::gesture::SeekGesture;
use super::types::PlaybackSnapshot;

pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// Outcome of one `PositionTicker::poll`.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// The interval has not elapsed yet.
    NotDue,
    /// Due, but a seek gesture is active; nothing was published.
    Suppressed,
    /// Due, but nothing is loaded.
    Idle,
    /// The controller's position was refreshed and published.
    Published(PlaybackSnapshot),
}

#[derive(Debug, Clone)]
pub struct PositionTicker {
    interval: Duration,
    next_due: Instant,
}

impl PositionTicker {
    /// First tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_TICK
        } else {
            interval
        };
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick, for sizing the event-loop wait.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub fn poll<O, R>(
        &mut self,
        now: Instant,
        controller: &mut PlaybackController<O, R>,
        gesture: &SeekGesture,
    ) -> Tick
    where
        O: AudioOutput,
        R: AssetResolver,
    {
        if now < self.next_due {
            return Tick::NotDue;
        }
        self.next_due = now + self.interval;

        if gesture.is_active() {
            return Tick::Suppressed;
        }

        match controller.sync_position() {
            Some(snapshot) => Tick::Published(snapshot),
            None => Tick::Idle,
        }
    }
}
