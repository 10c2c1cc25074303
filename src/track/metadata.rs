use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

/// The subset of file tags used to fill in a `TrackRecord`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub duration: Option<Duration>,
}

/// Read title and duration from an audio file's tags.
///
/// Returns `None` when lofty cannot parse the file at all. Blank titles and
/// zero durations are treated as missing.
pub fn read_tags(path: &Path) -> Option<TrackTags> {
    let tagged = match lofty::read_from_path(path) {
        Ok(t) => t,
        Err(e) => {
            log::debug!("no readable tags in {}: {e}", path.display());
            return None;
        }
    };

    let duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());

    let title = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .and_then(|tag| tag.title().map(|t| t.trim().to_string()))
        .filter(|t| !t.is_empty());

    Some(TrackTags { title, duration })
}
