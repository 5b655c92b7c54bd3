//! Per-frame driver for scripted camera animation.

use super::preset::AnimationPreset;
use crate::camera::{CameraPose, CameraRig};
use crate::error::CamrigError;

/// Animation time, advanced by scaled frame deltas.
///
/// Only moves forward while an animation runs; stopping resets it to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    t: f64,
}

impl AnimationClock {
    /// A clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Current animation time.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Advance by `dt * speed` and return the new time.
    pub fn advance(&mut self, dt: f64, speed: f64) -> f64 {
        self.t += dt * speed;
        self.t
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.t = 0.0;
    }
}

/// Advances the clock and writes the active preset's pose to the camera.
///
/// The driver has no opinion on ownership: the coordinator only ticks it
/// while animation is the authoritative pose writer.
#[derive(Debug)]
pub struct AnimationDriver {
    clock: AnimationClock,
    speed: f64,
    active: Option<AnimationPreset>,
}

impl AnimationDriver {
    /// An idle driver with the given clock speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            clock: AnimationClock::new(),
            speed,
            active: None,
        }
    }

    /// Start driving `preset`. The clock is left alone.
    pub fn activate(&mut self, preset: AnimationPreset) {
        log::debug!("animation driver: activate '{}'", preset.id());
        self.active = Some(preset);
    }

    /// Stop driving. The clock is left alone.
    pub fn deactivate(&mut self) {
        if let Some(preset) = self.active.take() {
            log::debug!("animation driver: deactivate '{}'", preset.id());
        }
    }

    /// Clock multiplier. Takes effect from the next tick; time already
    /// elapsed is not rescaled.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::NonFinite`] for NaN or infinite speeds and
    /// [`CamrigError::InvalidOptions`] for negative ones, which would run
    /// the clock backwards.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), CamrigError> {
        if !speed.is_finite() {
            return Err(CamrigError::NonFinite("animation_speed".into()));
        }
        if speed < 0.0 {
            return Err(CamrigError::InvalidOptions(format!(
                "animation speed must not be negative, got {speed}"
            )));
        }
        self.speed = speed;
        Ok(())
    }

    /// Current clock multiplier.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Clock back to zero. Never touches the camera.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Current animation time.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Pose of the active preset at the current clock, without advancing.
    #[must_use]
    pub fn current_pose(&self) -> Option<CameraPose> {
        self.active
            .as_ref()
            .map(|preset| preset.evaluate(self.clock.elapsed()))
    }

    /// Advance the clock, evaluate the active preset and write the result to
    /// `rig`. Returns the written pose, or `None` when idle or when the
    /// preset produced a non-finite pose (which is never written).
    pub fn tick<R: CameraRig + ?Sized>(
        &mut self,
        dt: f64,
        rig: &mut R,
    ) -> Option<CameraPose> {
        let preset = self.active.as_ref()?;
        let t = self.clock.advance(dt, self.speed);
        let pose = preset.evaluate(t);
        if !pose.is_finite() {
            log::warn!(
                "preset '{}' produced a non-finite pose at t={t}; skipped",
                preset.id()
            );
            return None;
        }
        rig.set_pose(pose);
        Some(pose)
    }
}
