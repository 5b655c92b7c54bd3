//! Shared utilities: easing curves and frame timing.

/// Easing curves applied to transition progress.
pub mod easing;
/// Per-frame delta time measurement.
pub mod frame_timing;

pub use easing::EasingFunction;
pub use frame_timing::FrameTiming;
