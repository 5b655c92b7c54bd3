//! One-shot eased interpolation from the live camera pose to a target.

use crate::camera::{CameraPose, CameraRig};
use crate::util::easing::EasingFunction;

/// Snapshot of an armed (or finished) transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    /// Whether the transition still owns the camera.
    pub is_active: bool,
    /// Live pose captured when the transition was armed.
    pub start_pose: CameraPose,
    /// Requested pose, written exactly on completion.
    pub end_pose: CameraPose,
    /// Raw (un-eased) progress in `[0, 1]`.
    pub progress: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Eased camera move toward a requested pose.
///
/// Arming while active overrides the in-flight transition, starting again
/// from wherever the camera is right now.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    state: TransitionState,
    easing: EasingFunction,
}

impl CameraTransition {
    /// An idle transition engine. `duration` is clamped to a positive value.
    #[must_use]
    pub fn new(duration: f64, easing: EasingFunction) -> Self {
        Self {
            state: TransitionState {
                is_active: false,
                start_pose: CameraPose::default(),
                end_pose: CameraPose::default(),
                progress: 0.0,
                duration: duration.max(f64::EPSILON),
            },
            easing,
        }
    }

    /// Change the duration. An in-flight transition keeps its progress
    /// fraction and finishes at the new rate.
    pub fn set_duration(&mut self, duration: f64) {
        self.state.duration = duration.max(f64::EPSILON);
    }

    /// Change the easing curve.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Arm a transition from the rig's live pose to `target`.
    pub fn start<R: CameraRig + ?Sized>(&mut self, target: CameraPose, rig: &R) {
        if self.state.is_active {
            log::debug!(
                "transition overridden at progress {:.3}",
                self.state.progress
            );
        }
        self.state.start_pose = rig.pose();
        self.state.end_pose = target;
        self.state.progress = 0.0;
        self.state.is_active = true;
    }

    /// Advance by `dt` seconds and write the interpolated pose. Returns
    /// whether a pose was written. The final tick writes the target exactly
    /// and deactivates.
    pub fn tick<R: CameraRig + ?Sized>(&mut self, dt: f64, rig: &mut R) -> bool {
        if !self.state.is_active {
            return false;
        }
        self.state.progress = (self.state.progress + dt / self.state.duration).min(1.0);

        if self.state.progress >= 1.0 {
            self.state.is_active = false;
            rig.set_pose(self.state.end_pose);
            log::debug!("transition complete");
            return true;
        }

        let eased = self.easing.evaluate(self.state.progress);
        rig.set_pose(self.state.start_pose.lerp(&self.state.end_pose, eased));
        true
    }

    /// Drop the transition wherever it is. The camera keeps its last pose.
    pub fn cancel(&mut self) {
        if self.state.is_active {
            log::debug!("transition cancelled at progress {:.3}", self.state.progress);
        }
        self.state.is_active = false;
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Target of the in-flight transition.
    #[must_use]
    pub fn target(&self) -> Option<CameraPose> {
        self.state.is_active.then_some(self.state.end_pose)
    }

    /// Raw progress of the current or last transition.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Full state snapshot.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self::new(1.0, EasingFunction::CubicInOut)
    }
}
