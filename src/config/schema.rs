use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/breather/config.toml` or
/// `~/.config/breather/config.toml`.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `BREATHER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub assets: AssetSettings,
    pub track: TrackSettings,
    pub controls: ControlsSettings,
    pub playback: PlaybackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output device name. Unset uses the system default.
    pub device: Option<String>,
    /// How often the position label is refreshed (milliseconds).
    pub tick_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            device: None,
            tick_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory searched for audio assets. A path given on the command
    /// line replaces it.
    pub dir: PathBuf,
    /// Audio extensions, in order of preference (case-insensitive, no dot).
    pub extensions: Vec<String>,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Fill in title and duration from the file's tags.
    pub read_tags: bool,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            extensions: vec!["mp3".into(), "m4a".into(), "flac".into(), "ogg".into(), "wav".into()],
            max_depth: None,
            read_tags: true,
        }
    }
}

/// Overrides for the built-in track. Unset fields keep the tag or built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_secs: Option<f64>,
    /// Asset name of the audio file (no extension needed).
    pub audio: Option<String>,
    pub artwork: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Seconds jumped by the skip back/forward keys.
    pub skip_seconds: u64,
    /// Seconds moved per key press while scrubbing.
    pub scrub_step_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            skip_seconds: 10,
            scrub_step_seconds: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Start with looping enabled.
    pub loop_on_start: bool,
    /// Begin playing as soon as the player opens. When false the track is
    /// loaded paused.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            loop_on_start: false,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter string, e.g. `info` or `breather=debug`.
    /// `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file. Without one, logging stays off; stderr shares the
    /// terminal with the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
