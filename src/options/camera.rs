use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, free-control and home-pose parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f64,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f64,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub zoom_speed: f64,
    /// Closest the free-control camera may dolly to its target.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub min_distance: f64,
    /// Farthest the free-control camera may dolly from its target.
    #[schemars(title = "Max Distance", range(min = 10.0, max = 200.0), extend("step" = 1.0))]
    pub max_distance: f64,
    /// Eye position the reset command returns to.
    #[schemars(skip)]
    pub home_position: [f64; 3],
    /// Look-at target the reset command returns to.
    #[schemars(skip)]
    pub home_look_at: [f64; 3],
}

impl CameraOptions {
    /// The configured home pose.
    #[must_use]
    pub fn home_pose(&self) -> CameraPose {
        CameraPose::from_arrays(self.home_position, self.home_look_at)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.4,
            pan_speed: 0.8,
            zoom_speed: 0.6,
            min_distance: 2.0,
            max_distance: 50.0,
            home_position: [8.0, 8.0, 8.0],
            home_look_at: [0.0, 0.0, 0.0],
        }
    }
}
