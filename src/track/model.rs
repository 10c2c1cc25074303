use std::hash::{Hash, Hasher};
use std::time::Duration;

use uuid::Uuid;

/// Opaque identifier assigned to every `TrackRecord` at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(Uuid);

impl TrackId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A single playable item.
///
/// Fields are private and there are no setters: a different track needs a
/// new record (and therefore a new id). Equality is by id only.
#[derive(Debug, Clone)]
pub struct TrackRecord {
    id: TrackId,
    title: String,
    description: String,
    duration: Duration,
    audio_resource: String,
    artwork_resource: String,
}

impl TrackRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
        audio_resource: impl Into<String>,
        artwork_resource: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            description: description.into(),
            duration,
            audio_resource: audio_resource.into(),
            artwork_resource: artwork_resource.into(),
        }
    }

    /// The track shipped with the app.
    pub fn builtin() -> Self {
        Self::new(
            "1 Minute Relaxing Meditation",
            "Clear your mind and slumber into nothingness. \
             Allocate only a few moments for a quick breather.",
            Duration::from_secs(70),
            "meditation1",
            "image-feather",
        )
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Expected length. Only authoritative until the decoder reports one.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn audio_resource(&self) -> &str {
        &self.audio_resource
    }

    pub fn artwork_resource(&self) -> &str {
        &self.artwork_resource
    }
}

impl PartialEq for TrackRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TrackRecord {}

impl Hash for TrackRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
