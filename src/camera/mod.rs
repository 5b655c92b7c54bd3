//! Camera system for 3D scene viewing.
//!
//! Provides the pose type, the [`CameraRig`] seam the control core writes
//! through, and an orbital controller implementing free rotate/pan/zoom.

/// Orbital camera controller managing rotation, pan and zoom.
pub mod controller;
/// Core camera struct and view/projection matrices.
pub mod core;
/// Camera position plus look-at target.
pub mod pose;
/// Trait for the live camera handle.
pub mod rig;

pub use self::controller::OrbitController;
pub use self::core::Camera;
pub use self::pose::CameraPose;
pub use self::rig::CameraRig;
