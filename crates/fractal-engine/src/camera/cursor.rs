/// Converts absolute cursor positions into look offsets.
///
/// The first sample after construction (or after [`reset`](Self::reset)) only
/// records a baseline and yields a zero offset, so the camera does not jump
/// when the cursor enters the window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `(x, y)` and returns `(dx, dy)` relative to the previous sample.
    ///
    /// `dy` is inverted (`last_y - y`): window coordinates grow downwards while
    /// pitch grows upwards.
    pub fn offset(&mut self, x: f64, y: f64) -> (f64, f64) {
        let (last_x, last_y) = self.last.replace((x, y)).unwrap_or((x, y));
        (x - last_x, last_y - y)
    }

    /// Forgets the baseline. The next sample produces no offset.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last.is_some()
    }
}
