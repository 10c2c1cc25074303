//! Track records: the immutable description of the item being played.
//!
//! A `TrackRecord` is built once at startup (defaults, file tags, config
//! overrides) and handed to the playback controller by value.

mod metadata;
mod model;

pub use metadata::read_tags;
pub use model::*;

#[cfg(test)]
mod tests;
