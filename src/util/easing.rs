//! Easing functions for camera interpolation.
//!
//! Provides the easing curves a [`CameraTransition`] can apply to its raw
//! progress before interpolating between poses.
//!
//! [`CameraTransition`]: crate::animation::CameraTransition

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Symmetric cubic ease-in-out: `4t³` below the midpoint,
    /// `1 - 4(1-t)³` above it. C¹-continuous at `t = 0.5`.
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let omt = 1.0 - t;
                    1.0 - 4.0 * omt * omt * omt
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_exact_points() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(0.5), 0.5);
        assert_eq!(ease.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let ease = EasingFunction::CubicInOut;
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let mirrored = 1.0 - ease.evaluate(1.0 - t);
            assert!((ease.evaluate(t) - mirrored).abs() < 1e-12, "t={t}");
        }
    }

    #[test]
    fn test_cubic_in_out_smooth_at_midpoint() {
        // Both branches have slope 3 at the midpoint.
        let ease = EasingFunction::CubicInOut;
        let h = 1e-6;
        let left = (ease.evaluate(0.5) - ease.evaluate(0.5 - h)) / h;
        let right = (ease.evaluate(0.5 + h) - ease.evaluate(0.5)) / h;
        assert!((left - 3.0).abs() < 1e-4);
        assert!((right - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert_eq!(ease.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25);
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
