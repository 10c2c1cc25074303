//! Audio output seam.
//!
//! The playback controller only talks to the traits in `output`; `session`
//! and `sink` implement them on top of `rodio`, and `resolve` turns asset
//! names into bytes.

mod output;
mod resolve;
mod session;
mod sink;

pub use output::{AudioHandle, AudioOutput};
pub use resolve::{AssetResolver, AudioAsset, DirResolver};
pub use session::RodioOutput;

#[cfg(test)]
pub(crate) mod fake;
