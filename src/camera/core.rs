use glam::{DMat4, DVec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: DVec3,
    /// Look-at target position.
    pub target: DVec3,
    /// Up direction vector.
    pub up: DVec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f64,
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Near clipping plane distance.
    pub znear: f64,
    /// Far clipping plane distance.
    pub zfar: f64,
}

impl Camera {
    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with a [0,1] depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: DVec3::new(0.0, 0.0, 10.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            aspect: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn target_projects_to_screen_center() {
        let clip = camera().build_matrix() * DVec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-12);
        assert!(ndc.y.abs() < 1e-12);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn forward_points_at_target() {
        let f = camera().forward();
        assert!((f - DVec3::NEG_Z).length() < 1e-12);
    }
}
