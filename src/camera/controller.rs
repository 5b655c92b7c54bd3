use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, DVec3};

use super::core::Camera;
use super::pose::CameraPose;
use super::rig::CameraRig;
use crate::options::CameraOptions;

/// Orbit radians per pixel of drag at sensitivity 1.0.
const ROTATE_RADIANS_PER_PIXEL: f64 = 0.01;
/// Pan distance per pixel, as a fraction of the orbit distance.
const PAN_FRACTION_PER_PIXEL: f64 = 0.002;
/// Dolly factor per unit of scroll at sensitivity 1.0.
const DOLLY_BASE: f64 = 0.95;
/// Stay just short of the poles so the view basis never degenerates.
const MAX_PITCH: f64 = FRAC_PI_2 - 0.01;

/// Free orbit control: rotate around the target, pan the view plane, dolly
/// zoom.
///
/// The eye and target stored in [`camera`](Self::camera) are authoritative.
/// Every gesture re-derives its spherical coordinates from them first, so a
/// pose written by an animation or transition is picked up without an
/// explicit resync.
pub struct OrbitController {
    /// The live camera.
    pub camera: Camera,
    rotate_speed: f64,
    pan_speed: f64,
    zoom_speed: f64,
    min_distance: f64,
    max_distance: f64,
}

impl OrbitController {
    /// Create a controller sitting at the home pose from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f64) -> Self {
        let home = options.home_pose();
        let camera = Camera {
            eye: home.position,
            target: home.look_at,
            up: DVec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        let mut controller = Self {
            camera,
            rotate_speed: 0.0,
            pan_speed: 0.0,
            zoom_speed: 0.0,
            min_distance: 0.0,
            max_distance: 0.0,
        };
        controller.apply_options(options);
        controller
    }

    /// Update sensitivities, limits and projection without moving the
    /// camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.min_distance = options.min_distance;
        self.max_distance = options.max_distance;
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = f64::from(width) / f64::from(height);
        }
    }

    /// `(distance, yaw, pitch)` of the eye around the target.
    fn spherical(&self) -> (f64, f64, f64) {
        let offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance <= f64::EPSILON {
            return (0.0, 0.0, 0.0);
        }
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        (distance, yaw, pitch)
    }

    fn place_eye(&mut self, distance: f64, yaw: f64, pitch: f64) {
        let (sin_p, cos_p) = pitch.sin_cos();
        let (sin_y, cos_y) = yaw.sin_cos();
        let offset = DVec3::new(cos_p * sin_y, sin_p, cos_p * cos_y);
        self.camera.eye = self.camera.target + offset * distance;
    }
}

impl CameraRig for OrbitController {
    fn pose(&self) -> CameraPose {
        CameraPose::new(self.camera.eye, self.camera.target)
    }

    fn set_pose(&mut self, pose: CameraPose) {
        self.camera.eye = pose.position;
        self.camera.target = pose.look_at;
    }

    fn sync_free_control(&mut self, look_at: DVec3) {
        self.camera.target = look_at;
    }

    fn rotate(&mut self, delta: DVec2) {
        let (distance, yaw, pitch) = self.spherical();
        if distance == 0.0 {
            return;
        }
        let step = ROTATE_RADIANS_PER_PIXEL * self.rotate_speed;
        let yaw = yaw - delta.x * step;
        let pitch = (pitch + delta.y * step).clamp(-MAX_PITCH, MAX_PITCH);
        self.place_eye(distance, yaw, pitch);
    }

    fn pan(&mut self, delta: DVec2) {
        let forward = self.camera.forward();
        let right = forward.cross(DVec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let scale = PAN_FRACTION_PER_PIXEL
            * self.pan_speed
            * self.camera.eye.distance(self.camera.target);

        let translation = (right * -delta.x + up * delta.y) * scale;
        self.camera.eye += translation;
        self.camera.target += translation;
    }

    fn zoom(&mut self, delta: f64) {
        let (distance, yaw, pitch) = self.spherical();
        if distance == 0.0 || delta == 0.0 {
            return;
        }
        let scale = DOLLY_BASE.powf(self.zoom_speed * delta.abs());
        let distance = if delta > 0.0 {
            distance * scale
        } else {
            distance / scale
        };
        let distance = distance.clamp(self.min_distance, self.max_distance);
        self.place_eye(distance, yaw, pitch);
    }
}
