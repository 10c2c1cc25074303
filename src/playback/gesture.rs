/// An in-progress scrub of the position slider.
///
/// While a gesture is active the ticker drops its updates so the value the
/// user is dragging is not overwritten. The gesture only holds the pending
/// value; committing it is up to the caller (`PlaybackController::seek`).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SeekGesture {
    value: Option<f64>,
}

impl SeekGesture {
    /// Start scrubbing from `from_secs`. Restarts an active gesture.
    pub fn begin(&mut self, from_secs: f64) {
        self.value = Some(from_secs.max(0.0));
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    /// Pending position in seconds, if scrubbing.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Move the pending value by `delta_secs`, kept within `[0, max_secs]`.
    pub fn nudge(&mut self, delta_secs: f64, max_secs: f64) {
        if let Some(v) = self.value.as_mut() {
            *v = (*v + delta_secs).clamp(0.0, max_secs.max(0.0));
        }
    }

    /// End the gesture and return the value to seek to.
    pub fn commit(&mut self) -> Option<f64> {
        self.value.take()
    }

    /// End the gesture without seeking.
    pub fn cancel(&mut self) {
        self.value = None;
    }
}
