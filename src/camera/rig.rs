//! The seam between the camera core and whatever owns the live camera.

use glam::{DVec2, DVec3};

use super::pose::CameraPose;

/// Mutable handle to the live camera and its orbit-control target.
///
/// The coordinator, animation driver and transition engine never hold the
/// camera themselves; each frame they read and write it through this trait.
/// [`OrbitController`](super::OrbitController) is the in-crate
/// implementation. Hosts that keep their own orbit control implement the
/// three required methods and leave the gesture methods as no-ops.
pub trait CameraRig {
    /// Current camera position and orbit target.
    fn pose(&self) -> CameraPose;

    /// Overwrite the camera position and orbit target.
    fn set_pose(&mut self, pose: CameraPose);

    /// Re-seat free orbit control on the camera's actual position, pivoting
    /// around `look_at`. Called when scripted control is released.
    fn sync_free_control(&mut self, look_at: DVec3);

    /// Orbit by `delta` pixels of pointer movement.
    fn rotate(&mut self, _delta: DVec2) {}

    /// Pan by `delta` pixels of pointer movement.
    fn pan(&mut self, _delta: DVec2) {}

    /// Dolly in (positive) or out (negative).
    fn zoom(&mut self, _delta: f64) {}
}
