use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::PathTransform;
use crate::util::easing::EasingFunction;

/// Where free orbit control pivots after scripted control lets go.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseLookAt {
    /// Keep the look-at target the camera had when released.
    #[default]
    Preserve,
    /// Snap the pivot back to the world origin.
    Origin,
}

/// A preset declared in options, derived from a built-in or an earlier
/// derived preset.
///
/// ```toml
/// [[animation.derived]]
/// id = "wide_orbit"
/// base = "orbit"
/// radius_multiplier = 1.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedPresetOptions {
    /// Id the derived preset is registered under.
    pub id: String,
    /// Id of the preset it derives from.
    pub base: String,
    /// Reshaping applied to the base path.
    #[serde(flatten)]
    pub transform: PathTransform,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Scripted animation, transition and handoff parameters.
pub struct AnimationOptions {
    /// Preset running at startup, or `"none"` to start in free control.
    #[schemars(title = "Initial Animation")]
    pub initial_animation: String,
    /// Animation clock multiplier.
    #[schemars(title = "Animation Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub animation_speed: f64,
    /// Ease into a newly selected preset instead of snapping to it.
    #[schemars(title = "Smooth Hand-In")]
    pub smooth_hand_in: bool,
    /// Pivot used by free control after an animation is released.
    #[schemars(title = "Release Look-At")]
    pub release_look_at: ReleaseLookAt,
    /// Length of an eased transition, in seconds.
    #[schemars(title = "Transition Duration", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub transition_duration: f64,
    /// Curve applied to transition progress.
    #[schemars(skip)]
    pub transition_easing: EasingFunction,
    /// How long the mouse-controls toast stays up, in seconds.
    #[schemars(skip)]
    pub feedback_duration: f64,
    /// Upper bound on a single frame's delta, in seconds.
    #[schemars(skip)]
    pub max_frame_delta: f64,
    /// Presets derived at startup, registered in order.
    #[schemars(skip)]
    pub derived: Vec<DerivedPresetOptions>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            initial_animation: "orbit".into(),
            animation_speed: 0.2,
            smooth_hand_in: false,
            release_look_at: ReleaseLookAt::Preserve,
            transition_duration: 1.0,
            transition_easing: EasingFunction::CubicInOut,
            feedback_duration: 2.5,
            max_frame_delta: 0.1,
            derived: Vec::new(),
        }
    }
}
