//! Parametric camera paths and the presets built from them.

use std::fmt;
use std::sync::Arc;

use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::error::CamrigError;

/// A pure function family mapping animation time to a camera pose.
///
/// Implementations must be referentially transparent: the same `t` always
/// yields the same position and look-at, bit for bit.
pub trait CameraPath: Send + Sync {
    /// Camera eye position at time `t`.
    fn position(&self, t: f64) -> DVec3;

    /// Look-at target at time `t`.
    fn look_at(&self, t: f64) -> DVec3;

    /// Full pose at time `t`.
    fn pose(&self, t: f64) -> CameraPose {
        CameraPose::new(self.position(t), self.look_at(t))
    }
}

/// Type alias for shared path references.
pub type SharedPath = Arc<dyn CameraPath>;

/// Create a shared path from any [`CameraPath`] implementation.
#[must_use]
pub fn shared<P: CameraPath + 'static>(path: P) -> SharedPath {
    Arc::new(path)
}

/// Reshapes an existing path into a new one.
///
/// Time is pre-scaled by `speed_multiplier`; horizontal position (x, z) is
/// scaled by `radius_multiplier`; `height_offset` is added to the vertical
/// position and `look_at_offset` to the look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PathTransform {
    /// Scale applied to the x and z position channels.
    pub radius_multiplier: f64,
    /// Added to the y position channel.
    pub height_offset: f64,
    /// Scale applied to `t` before the base path is evaluated.
    pub speed_multiplier: f64,
    /// Added component-wise to the look-at target.
    pub look_at_offset: [f64; 3],
}

impl Default for PathTransform {
    fn default() -> Self {
        Self {
            radius_multiplier: 1.0,
            height_offset: 0.0,
            speed_multiplier: 1.0,
            look_at_offset: [0.0; 3],
        }
    }
}

impl PathTransform {
    /// Reject transforms that would feed NaN or infinity into the camera.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::NonFinite`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CamrigError> {
        let fields = [
            ("radius_multiplier", self.radius_multiplier),
            ("height_offset", self.height_offset),
            ("speed_multiplier", self.speed_multiplier),
            ("look_at_offset.x", self.look_at_offset[0]),
            ("look_at_offset.y", self.look_at_offset[1]),
            ("look_at_offset.z", self.look_at_offset[2]),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, _)) => Err(CamrigError::NonFinite((*name).into())),
            None => Ok(()),
        }
    }
}

/// A path derived from another one through a [`PathTransform`].
pub struct DerivedPath {
    base: SharedPath,
    transform: PathTransform,
}

impl DerivedPath {
    /// Wrap `base` with `transform`.
    #[must_use]
    pub fn new(base: SharedPath, transform: PathTransform) -> Self {
        Self { base, transform }
    }
}

impl CameraPath for DerivedPath {
    fn position(&self, t: f64) -> DVec3 {
        let p = self.base.position(t * self.transform.speed_multiplier);
        DVec3::new(
            p.x * self.transform.radius_multiplier,
            p.y + self.transform.height_offset,
            p.z * self.transform.radius_multiplier,
        )
    }

    fn look_at(&self, t: f64) -> DVec3 {
        self.base.look_at(t * self.transform.speed_multiplier)
            + DVec3::from_array(self.transform.look_at_offset)
    }
}

/// A named camera path.
#[derive(Clone)]
pub struct AnimationPreset {
    id: String,
    path: SharedPath,
}

impl AnimationPreset {
    /// Name `path` as `id`.
    #[must_use]
    pub fn new(id: impl Into<String>, path: SharedPath) -> Self {
        Self {
            id: id.into(),
            path,
        }
    }

    /// Preset identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The underlying path.
    #[must_use]
    pub fn path(&self) -> &SharedPath {
        &self.path
    }

    /// Pose at animation time `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> CameraPose {
        self.path.pose(t)
    }

    /// Build a new preset from this one. Deriving from a derived preset
    /// applies both transforms, innermost first.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::NonFinite`] if `transform` has non-finite
    /// fields.
    pub fn derive(
        &self,
        id: impl Into<String>,
        transform: PathTransform,
    ) -> Result<Self, CamrigError> {
        transform.validate()?;
        let path = shared(DerivedPath::new(self.path.clone(), transform));
        Ok(Self::new(id, path))
    }
}

impl fmt::Debug for AnimationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationPreset")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
