//! Error types for breather.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by playback controller operations.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The track's audio resource could not be located.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// The output session could not be configured or activated.
    #[error("audio session activation failed: {0}")]
    SessionActivationFailed(#[from] SessionError),

    /// An operation needing a loaded track was called while idle.
    #[error("no active audio resource")]
    NoActiveResource,

    /// The resource was found but could not be decoded.
    #[error("failed to decode audio: {0}")]
    DecodeFailed(String),

    /// The output rejected a cursor move.
    #[error("seek failed: {0}")]
    SeekFailed(String),
}

/// Failures of the host output session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No default output device is available.
    #[error("no audio output device")]
    NoDevice,

    /// The configured output device does not exist.
    #[error("output device not found: {0}")]
    DeviceNotFound(String),

    /// The session was used before it was configured and activated.
    #[error("output session is not active")]
    Inactive,

    /// Opening the output stream failed.
    #[error("output stream error: {0}")]
    Stream(String),
}

/// Failures of a loaded resource handle.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output session is not active")]
    Inactive,

    #[error("decode error: {0}")]
    Decode(String),

    #[error("seek error: {0}")]
    Seek(String),
}

impl From<OutputError> for PlaybackError {
    fn from(e: OutputError) -> Self {
        match e {
            OutputError::Inactive => PlaybackError::SessionActivationFailed(SessionError::Inactive),
            OutputError::Decode(msg) => PlaybackError::DecodeFailed(msg),
            OutputError::Seek(msg) => PlaybackError::SeekFailed(msg),
        }
    }
}

/// Asset lookup failures.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no audio asset named {0:?}")]
    NotFound(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ResolveError> for PlaybackError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(name) => PlaybackError::ResourceNotFound(name),
            ResolveError::Io { path, .. } => {
                PlaybackError::ResourceNotFound(path.display().to_string())
            }
        }
    }
}
