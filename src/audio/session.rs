//! Output session backed by a `rodio` output stream.

use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::{OutputStream, OutputStreamBuilder};

use crate::error::{OutputError, SessionError};

use super::output::AudioOutput;
use super::resolve::AudioAsset;
use super::sink::RodioHandle;

/// Owns the device selection and the open stream. Handles created by `load`
/// render through this stream, so it must outlive them.
pub struct RodioOutput {
    device_name: Option<String>,
    device: Option<rodio::cpal::Device>,
    stream: Option<OutputStream>,
}

impl RodioOutput {
    /// `device_name` picks a specific output; `None` uses the host default.
    pub fn new(device_name: Option<String>) -> Self {
        Self {
            device_name,
            device: None,
            stream: None,
        }
    }
}

impl AudioOutput for RodioOutput {
    type Handle = RodioHandle;

    fn configure_for_playback(&mut self) -> Result<(), SessionError> {
        if self.stream.is_some() || self.device.is_some() {
            return Ok(());
        }

        let host = rodio::cpal::default_host();
        let device = match self.device_name.as_deref() {
            Some(wanted) => host
                .output_devices()
                .map_err(|e| SessionError::Stream(e.to_string()))?
                .find(|d| d.name().map(|n| n == wanted).unwrap_or(false))
                .ok_or_else(|| SessionError::DeviceNotFound(wanted.to_string()))?,
            None => host.default_output_device().ok_or(SessionError::NoDevice)?,
        };

        log::info!(
            "audio output: {}",
            device.name().unwrap_or_else(|_| "<unnamed>".to_string())
        );
        self.device = Some(device);
        Ok(())
    }

    fn activate(&mut self) -> Result<(), SessionError> {
        if self.stream.is_some() {
            return Ok(());
        }

        let device = self.device.take().ok_or(SessionError::Inactive)?;
        let mut stream = OutputStreamBuilder::from_device(device)
            .and_then(|b| b.open_stream())
            .map_err(|e| SessionError::Stream(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which would land
        // on top of the terminal UI.
        stream.log_on_drop(false);

        self.stream = Some(stream);
        Ok(())
    }

    fn load(&mut self, asset: &AudioAsset) -> Result<RodioHandle, OutputError> {
        let stream = self.stream.as_ref().ok_or(OutputError::Inactive)?;
        log::debug!("decoding {:?} ({} bytes)", asset.name, asset.bytes.len());
        RodioHandle::new(stream, asset.bytes.clone())
    }
}
