use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_breather_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("BREATHER_CONFIG_PATH", "/tmp/breather-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/breather-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("breather")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("breather")
            .join("config.toml")
    );
}

#[test]
fn defaults_validate() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.audio.tick_ms, 500);
    assert_eq!(s.controls.skip_seconds, 10);
    assert!(s.playback.autoplay);
    assert!(!s.playback.loop_on_start);
    assert_eq!(s.assets.extensions[0], "mp3");
}

#[test]
fn validate_rejects_unusable_values() {
    let mut s = Settings::default();
    s.audio.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.skip_seconds = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.track.duration_secs = Some(-1.0);
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.track.duration_secs = Some(f64::NAN);
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.assets.extensions = vec![" ".into()];
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
device = "USB DAC"
tick_ms = 250

[assets]
dir = "/srv/sounds"
extensions = ["ogg", "mp3"]
max_depth = 2
read_tags = false

[track]
title = "Evening Wind-down"
duration_secs = 95.5
audio = "evening"

[controls]
skip_seconds = 15
scrub_step_seconds = 5

[playback]
loop_on_start = true
autoplay = false

[logging]
level = "breather=debug"
file = "/tmp/breather.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("BREATHER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("BREATHER__AUDIO__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.device.as_deref(), Some("USB DAC"));
    assert_eq!(s.audio.tick_ms, 250);
    assert_eq!(s.assets.dir, std::path::PathBuf::from("/srv/sounds"));
    assert_eq!(s.assets.extensions, vec!["ogg".to_string(), "mp3".to_string()]);
    assert_eq!(s.assets.max_depth, Some(2));
    assert!(!s.assets.read_tags);
    assert_eq!(s.track.title.as_deref(), Some("Evening Wind-down"));
    assert_eq!(s.track.duration_secs, Some(95.5));
    assert_eq!(s.track.audio.as_deref(), Some("evening"));
    assert_eq!(s.track.description, None);
    assert_eq!(s.controls.skip_seconds, 15);
    assert_eq!(s.controls.scrub_step_seconds, 5);
    assert!(s.playback.loop_on_start);
    assert!(!s.playback.autoplay);
    assert_eq!(s.logging.level, "breather=debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/breather.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
tick_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("BREATHER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("BREATHER__AUDIO__TICK_MS", "100");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.tick_ms, 100);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "BREATHER_CONFIG_PATH",
        dir.path().join("nope.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::remove("BREATHER__AUDIO__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.tick_ms, 500);
    assert_eq!(s.controls.skip_seconds, 10);
}

#[test]
fn oversized_track_duration_fails_validation() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[track]
duration_secs = 1e20
"#,
    )
    .unwrap();
    let _g1 = EnvGuard::set("BREATHER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("BREATHER__TRACK__DURATION_SECS");

    let s = Settings::load().unwrap();
    assert_eq!(s.track.duration_secs, Some(1e20));
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.track.duration_secs = Some(3600.0);
    assert!(s.validate().is_ok());
}
