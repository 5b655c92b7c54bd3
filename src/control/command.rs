//! The camera core's complete interactive vocabulary.
//!
//! Every camera-facing operation, whether triggered by a key press, a
//! pointer gesture, a UI button or a programmatic call, is represented as a
//! `CameraCommand`. Consumers construct commands and pass them to
//! [`CameraCoordinator::execute`](super::CameraCoordinator::execute).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// What kind of interaction outside the UI asked for free control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InteractionSource {
    /// Pointer press on the canvas.
    Click,
    /// Wheel over the canvas.
    Wheel,
    /// The Escape key.
    Escape,
}

/// A request to change who drives the camera, or to move it.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraCommand {
    // ── Animation ──
    /// Run preset `id`; `"none"` or `"manual"` stop the running animation.
    SelectAnimation {
        /// Preset id or control word.
        id: String,
    },
    /// Change the animation clock multiplier.
    SetAnimationSpeed {
        /// New multiplier (non-negative).
        speed: f64,
    },

    // ── Ownership ──
    /// Stop animating and ease back to the home pose.
    ResetCamera,
    /// Flip free control, or release a running animation.
    ToggleMouseControls,
    /// The user touched the scene outside any UI element.
    Interact {
        /// What kind of interaction it was.
        source: InteractionSource,
    },

    // ── Free control ──
    /// Orbit by a pointer delta in pixels.
    RotateCamera {
        /// Pointer movement in pixels.
        delta: DVec2,
    },
    /// Pan by a pointer delta in pixels.
    PanCamera {
        /// Pointer movement in pixels.
        delta: DVec2,
    },
    /// Dolly in (positive) or out (negative).
    Zoom {
        /// Wheel amount.
        delta: f64,
    },

    // ── Scripted ──
    /// Ease the camera to an explicit pose.
    TransitionTo {
        /// Target pose.
        pose: CameraPose,
    },
}
