//! `rodio` sink wrapper implementing `AudioHandle`.
//!
//! The handle keeps the encoded bytes around so it can build a fresh decoder
//! when the track has to start over (looping, or a seek after the end).

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::OutputError;

use super::output::AudioHandle;

type TrackDecoder = Decoder<Cursor<Arc<[u8]>>>;

fn decode(bytes: &Arc<[u8]>) -> Result<TrackDecoder, OutputError> {
    Decoder::new(Cursor::new(Arc::clone(bytes))).map_err(|e| OutputError::Decode(e.to_string()))
}

pub struct RodioHandle {
    sink: Sink,
    bytes: Arc<[u8]>,
    duration: Option<Duration>,
}

impl RodioHandle {
    /// Create a paused handle for `bytes` connected to `stream`'s mixer.
    pub(super) fn new(stream: &OutputStream, bytes: Arc<[u8]>) -> Result<Self, OutputError> {
        let source = decode(&bytes)?;
        let duration = source.total_duration();

        let sink = Sink::connect_new(stream.mixer());
        sink.pause();
        sink.append(source);

        Ok(Self {
            sink,
            bytes,
            duration,
        })
    }
}

impl AudioHandle for RodioHandle {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek(&mut self, to: Duration) -> Result<(), OutputError> {
        // Nothing left to seek in once the source ran out.
        if self.sink.empty() {
            let was_paused = self.sink.is_paused();
            self.rewind()?;
            if !was_paused {
                self.sink.play();
            }
        }
        self.sink
            .try_seek(to)
            .map_err(|e| OutputError::Seek(e.to_string()))
    }

    fn rewind(&mut self) -> Result<(), OutputError> {
        let source = decode(&self.bytes)?;
        // `clear` also pauses the sink.
        self.sink.clear();
        self.sink.append(source);
        Ok(())
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn stop(&mut self) {
        self.sink.stop();
    }
}
