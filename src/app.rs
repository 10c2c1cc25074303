//! Application module: the view model shared by the UI and the runtime.
//!
//! The `App` model lives in `app::model` and holds the track on display,
//! the current screen and the pending seek gesture.

mod model;

pub use model::*;
