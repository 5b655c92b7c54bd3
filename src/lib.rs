// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera ownership, scripted animation and eased handoff for an in-browser
//! 3D scene editor.
//!
//! At any instant exactly one component writes the camera pose: the user
//! through free orbit control, a parametric animation preset, or an eased
//! transition. [`CameraCoordinator`] decides which, and consumes the
//! edge-triggered commands (preset selection, reset, clicks outside the UI)
//! that hand control from one to another.
//!
//! # Key entry points
//!
//! - [`control::CameraCoordinator`] - ownership arbitration and the frame
//!   loop
//! - [`animation::PresetLibrary`] - the named camera paths
//! - [`camera::CameraRig`] - the seam to whatever owns the live camera, with
//!   [`camera::OrbitController`] as the built-in implementation
//! - [`input::InputProcessor`] - raw pointer/key events to
//!   [`control::CameraCommand`]s
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   keybindings)
//!
//! # Frame order
//!
//! Each [`CameraCoordinator::frame`] call ticks the feedback toast, then runs
//! the single pose writer chosen at the start of the frame: the transition
//! if one is in flight, else the animation driver if a preset is running.
//! Free control writes only through gesture commands.

pub mod animation;
pub mod camera;
pub mod control;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use animation::{AnimationPreset, CameraPath, PathTransform, PresetLibrary};
pub use camera::{CameraPose, CameraRig, OrbitController};
pub use control::{
    CameraCommand, CameraCoordinator, CameraEvent, InteractionSource, Owner,
};
pub use error::CamrigError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
