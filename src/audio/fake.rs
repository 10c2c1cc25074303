//! In-memory audio backend for tests.
//!
//! All handles share one `FakeState` with the test so it can inspect what the
//! controller did and simulate the end of a track.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{OutputError, ResolveError, SessionError};

use super::output::{AudioHandle, AudioOutput};
use super::resolve::{AssetResolver, AudioAsset};

#[derive(Debug, Default)]
pub struct FakeState {
    pub fail_configure: bool,
    pub fail_activate: bool,
    pub fail_decode: bool,
    pub fail_seek: bool,
    /// Duration reported by loaded handles; `None` mimics a decoder that
    /// cannot tell.
    pub decoded_duration: Option<Duration>,

    pub configured: u32,
    pub activated: u32,
    pub loads: u32,
    pub live_handles: u32,
    pub max_live_handles: u32,
    pub rewinds: u32,

    pub playing: bool,
    pub position: Duration,
    pub finished: bool,
}

pub type SharedFake = Rc<RefCell<FakeState>>;

pub struct FakeOutput {
    pub state: SharedFake,
}

impl FakeOutput {
    pub fn new(decoded_duration: Option<Duration>) -> (Self, SharedFake) {
        let state = Rc::new(RefCell::new(FakeState {
            decoded_duration,
            ..FakeState::default()
        }));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl AudioOutput for FakeOutput {
    type Handle = FakeHandle;

    fn configure_for_playback(&mut self) -> Result<(), SessionError> {
        let mut s = self.state.borrow_mut();
        if s.fail_configure {
            return Err(SessionError::NoDevice);
        }
        s.configured += 1;
        Ok(())
    }

    fn activate(&mut self) -> Result<(), SessionError> {
        let mut s = self.state.borrow_mut();
        if s.fail_activate {
            return Err(SessionError::Stream("device busy".into()));
        }
        s.activated += 1;
        Ok(())
    }

    fn load(&mut self, _asset: &AudioAsset) -> Result<FakeHandle, OutputError> {
        let mut s = self.state.borrow_mut();
        if s.fail_decode {
            return Err(OutputError::Decode("unsupported format".into()));
        }
        s.loads += 1;
        s.live_handles += 1;
        s.max_live_handles = s.max_live_handles.max(s.live_handles);
        s.playing = false;
        s.position = Duration::ZERO;
        s.finished = false;
        Ok(FakeHandle {
            state: self.state.clone(),
        })
    }
}

pub struct FakeHandle {
    state: SharedFake,
}

impl AudioHandle for FakeHandle {
    fn play(&mut self) {
        self.state.borrow_mut().playing = true;
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn seek(&mut self, to: Duration) -> Result<(), OutputError> {
        let mut s = self.state.borrow_mut();
        if s.fail_seek {
            return Err(OutputError::Seek("not seekable".into()));
        }
        s.position = to;
        s.finished = false;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), OutputError> {
        let mut s = self.state.borrow_mut();
        s.rewinds += 1;
        s.position = Duration::ZERO;
        s.finished = false;
        s.playing = false;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.state.borrow().position
    }

    fn duration(&self) -> Option<Duration> {
        self.state.borrow().decoded_duration
    }

    fn is_finished(&self) -> bool {
        self.state.borrow().finished
    }

    fn stop(&mut self) {
        self.state.borrow_mut().playing = false;
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        let mut s = self.state.borrow_mut();
        s.live_handles -= 1;
        s.playing = false;
    }
}

/// Resolver over a fixed set of names.
#[derive(Default)]
pub struct FakeResolver {
    assets: HashMap<String, AudioAsset>,
}

impl FakeResolver {
    pub fn with(names: &[&str]) -> Self {
        let assets = names
            .iter()
            .map(|n| {
                let asset = AudioAsset {
                    name: n.to_string(),
                    bytes: vec![0u8; 16].into(),
                };
                (n.to_string(), asset)
            })
            .collect();
        Self { assets }
    }
}

impl AssetResolver for FakeResolver {
    fn resolve(&self, name: &str) -> Result<AudioAsset, ResolveError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}
