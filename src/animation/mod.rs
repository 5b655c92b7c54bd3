//! Scripted camera motion.
//!
//! - [`preset`]: the [`CameraPath`] trait and named [`AnimationPreset`]s,
//!   including derived presets.
//! - [`library`]: the built-in path catalogue and the [`PresetLibrary`]
//!   registry.
//! - [`driver`]: the clock and per-frame [`AnimationDriver`].
//! - [`transition`]: the eased [`CameraTransition`] engine.

pub mod driver;
pub mod library;
pub mod preset;
pub mod transition;

pub use driver::{AnimationClock, AnimationDriver};
pub use library::{BuiltinPath, PresetLibrary};
pub use preset::{
    shared, AnimationPreset, CameraPath, DerivedPath, PathTransform, SharedPath,
};
pub use transition::{CameraTransition, TransitionState};
