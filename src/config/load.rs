use std::{env, path::PathBuf, time::Duration};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `BREATHER__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("BREATHER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.tick_ms == 0 {
            return Err("audio.tick_ms must be >= 1".to_string());
        }
        if self.controls.skip_seconds == 0 {
            return Err("controls.skip_seconds must be >= 1".to_string());
        }
        if self.controls.scrub_step_seconds == 0 {
            return Err("controls.scrub_step_seconds must be >= 1".to_string());
        }
        if let Some(d) = self.track.duration_secs {
            if Duration::try_from_secs_f64(d).is_err() {
                return Err("track.duration_secs is out of range".to_string());
            }
        }
        if self.assets.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("assets.extensions must list at least one extension".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `BREATHER_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("BREATHER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/breather/config.toml`
/// or `~/.config/breather/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("breather").join("config.toml"))
}
