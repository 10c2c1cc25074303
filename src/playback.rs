//! Playback state controller and the position ticker that keeps its
//! published position fresh.

mod controller;
mod gesture;
mod observer;
mod ticker;
mod types;

pub use controller::PlaybackController;
pub use gesture::SeekGesture;
pub use observer::{LogObserver, SnapshotHandle};
pub use ticker::{PositionTicker, Tick};
pub use types::{PlaybackSnapshot, PlaybackState, progress};
