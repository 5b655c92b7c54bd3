//! Camera ownership: who drives the camera, and how control changes hands.

/// The camera command vocabulary.
pub mod command;
/// The frame loop and handoff logic.
pub mod coordinator;
/// Notifications for the surrounding UI.
pub mod event;
/// The "mouse controls activated" toast timer.
pub mod feedback;
/// Derived pose-writer state.
pub mod ownership;

pub use command::{CameraCommand, InteractionSource};
pub use coordinator::{CameraCoordinator, NO_ANIMATION};
pub use event::CameraEvent;
pub use feedback::FeedbackToast;
pub use ownership::{Owner, Ownership};
