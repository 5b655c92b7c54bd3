//! Camera, animation and keybinding options with TOML preset support.
//!
//! Options serialize to/from TOML so a scene can ship its own camera feel
//! (home pose, sensitivities, startup animation, derived presets).

mod animation;
mod camera;

use std::path::Path;

pub use animation::{AnimationOptions, DerivedPresetOptions, ReleaseLookAt};
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CamrigError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, free-control and home-pose parameters.
    pub camera: CameraOptions,
    /// Scripted animation and transition parameters.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or does not pass
    /// [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, CamrigError> {
        let content = std::fs::read_to_string(path).map_err(CamrigError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    ///
    /// # Errors
    ///
    /// Fails if the text does not parse or does not pass
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, CamrigError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails on serialization or I/O errors.
    pub fn save(&self, path: &Path) -> Result<(), CamrigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamrigError::Io)?;
        }
        std::fs::write(path, content).map_err(CamrigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check numeric ranges that the rest of the crate relies on.
    ///
    /// Derived preset ids and bases are checked when the preset library is
    /// built, not here.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::NonFinite`] for NaN or infinite values and
    /// [`CamrigError::InvalidOptions`] for out-of-range ones.
    pub fn validate(&self) -> Result<(), CamrigError> {
        let camera = &self.camera;
        let animation = &self.animation;

        let finite = [
            ("camera.fovy", camera.fovy),
            ("camera.znear", camera.znear),
            ("camera.zfar", camera.zfar),
            ("camera.rotate_speed", camera.rotate_speed),
            ("camera.pan_speed", camera.pan_speed),
            ("camera.zoom_speed", camera.zoom_speed),
            ("camera.min_distance", camera.min_distance),
            ("camera.max_distance", camera.max_distance),
            ("animation.animation_speed", animation.animation_speed),
            ("animation.transition_duration", animation.transition_duration),
            ("animation.feedback_duration", animation.feedback_duration),
            ("animation.max_frame_delta", animation.max_frame_delta),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CamrigError::NonFinite((*name).into()));
        }
        if !camera.home_pose().is_finite() {
            return Err(CamrigError::NonFinite("camera.home_position".into()));
        }

        let positive = [
            ("camera.fovy", camera.fovy),
            ("camera.znear", camera.znear),
            ("camera.min_distance", camera.min_distance),
            ("animation.transition_duration", animation.transition_duration),
            ("animation.feedback_duration", animation.feedback_duration),
            ("animation.max_frame_delta", animation.max_frame_delta),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(CamrigError::InvalidOptions(format!(
                "{name} must be positive, got {value}"
            )));
        }
        if camera.zfar <= camera.znear {
            return Err(CamrigError::InvalidOptions(
                "camera.zfar must exceed camera.znear".into(),
            ));
        }
        if camera.max_distance < camera.min_distance {
            return Err(CamrigError::InvalidOptions(
                "camera.max_distance must not be below camera.min_distance"
                    .into(),
            ));
        }
        if animation.animation_speed < 0.0 {
            return Err(CamrigError::InvalidOptions(
                "animation.animation_speed must not be negative".into(),
            ));
        }
        for derived in &animation.derived {
            derived.transform.validate()?;
        }
        Ok(())
    }
}
