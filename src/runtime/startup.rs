use std::time::Duration;

use crate::audio::{AssetResolver, AudioOutput, DirResolver};
use crate::config;
use crate::playback::PlaybackController;
use crate::track::{self, TrackRecord};

/// Assemble the track shown at startup.
///
/// Each field comes from the `[track]` config section if set, then from the
/// audio file's tags (when `assets.read_tags` is on), then from the built-in
/// record.
pub fn build_track(settings: &config::Settings, resolver: &DirResolver) -> TrackRecord {
    let builtin = TrackRecord::builtin();
    let overrides = &settings.track;

    let audio = overrides
        .audio
        .clone()
        .unwrap_or_else(|| builtin.audio_resource().to_string());

    let tags = if settings.assets.read_tags {
        resolver.locate(&audio).and_then(|p| track::read_tags(&p))
    } else {
        None
    };
    let tags = tags.unwrap_or_default();

    let title = overrides
        .title
        .clone()
        .or(tags.title)
        .unwrap_or_else(|| builtin.title().to_string());
    let description = overrides
        .description
        .clone()
        .unwrap_or_else(|| builtin.description().to_string());
    let duration = overrides
        .duration_secs
        .and_then(|d| Duration::try_from_secs_f64(d).ok())
        .or(tags.duration)
        .unwrap_or_else(|| builtin.duration());
    let artwork = overrides
        .artwork
        .clone()
        .unwrap_or_else(|| builtin.artwork_resource().to_string());

    TrackRecord::new(title, description, duration, audio, artwork)
}

/// Apply `[playback]` defaults that act on the controller before the UI starts.
pub fn apply_playback_defaults<O: AudioOutput, R: AssetResolver>(
    controller: &mut PlaybackController<O, R>,
    settings: &config::Settings,
) {
    if settings.playback.loop_on_start && !controller.is_looping() {
        controller.toggle_loop();
    }
}
