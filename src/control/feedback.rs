//! Auto-hiding "mouse controls activated" toast.

/// Countdown for the feedback toast shown when an interaction hands the
/// camera back to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackToast {
    duration: f64,
    remaining: Option<f64>,
}

impl FeedbackToast {
    /// A hidden toast that stays up for `duration` seconds once shown.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            remaining: None,
        }
    }

    /// Change how long the toast stays up. Takes effect on the next
    /// [`show`](Self::show).
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Show the toast, restarting its timer. Returns `true` only if it was
    /// hidden before.
    pub fn show(&mut self) -> bool {
        let newly_shown = self.remaining.is_none();
        self.remaining = Some(self.duration);
        newly_shown
    }

    /// Count down by `dt`. Returns `true` on the tick the toast hides.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }

    /// Whether the toast is up.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.remaining.is_some()
    }
}
