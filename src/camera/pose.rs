use glam::DVec3;

/// A camera position plus the point it looks at.
///
/// There is no roll: the up vector is always world +Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: DVec3,
    /// Look-at target (the orbit control's pivot).
    pub look_at: DVec3,
}

impl CameraPose {
    /// Build a pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: DVec3, look_at: DVec3) -> Self {
        Self { position, look_at }
    }

    /// Build a pose from plain arrays, as stored in options files.
    #[must_use]
    pub fn from_arrays(position: [f64; 3], look_at: [f64; 3]) -> Self {
        Self::new(DVec3::from_array(position), DVec3::from_array(look_at))
    }

    /// Interpolate position and look-at independently.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }

    /// Distance between the eye and the look-at target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.position.distance(self.look_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_both_channels() {
        let a = CameraPose::new(DVec3::ZERO, DVec3::ZERO);
        let b = CameraPose::new(DVec3::new(2.0, 4.0, 6.0), DVec3::X);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mid.look_at, DVec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn non_finite_components_are_detected() {
        let good = CameraPose::from_arrays([8.0, 8.0, 8.0], [0.0; 3]);
        assert!(good.is_finite());
        let bad = CameraPose::from_arrays([f64::NAN, 0.0, 0.0], [0.0; 3]);
        assert!(!bad.is_finite());
    }
}
