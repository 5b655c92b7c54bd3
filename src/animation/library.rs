//! Built-in camera paths and the preset registry.

use glam::DVec3;
use rustc_hash::FxHashMap;

use super::preset::{shared, AnimationPreset, CameraPath, PathTransform};
use crate::camera::CameraPose;
use crate::error::CamrigError;
use crate::options::AnimationOptions;

/// Ids with control meaning that can never name a preset.
pub const RESERVED_IDS: [&str; 2] = ["none", "manual"];

/// Whether `id` is a control word rather than a preset name.
#[must_use]
pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

/// Anchor the swing preset oscillates around (the default home eye).
const SWING_ANCHOR: DVec3 = DVec3::new(8.0, 8.0, 8.0);

/// The closed-form camera paths that ship with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPath {
    /// Level circle of radius 10 at height 8.
    Orbit,
    /// Side-to-side sway around the home position.
    Swing,
    /// Dolly in and out along the home viewing axis.
    Zoom,
    /// Circle whose radius and height breathe slowly.
    Spiral,
    /// Lissajous figure-eight with a gentle height wave.
    Figure8,
    /// Uniform circle of radius 8 at height 5.
    Circular,
    /// Ever-widening, ever-climbing helix.
    RisingSpiral,
    /// Pendulum swing in front of the scene.
    Pendulum,
    /// Orbit with pulsing radius and a wandering target.
    Eccentric,
    /// Fast descending, narrowing helix.
    Tornado,
    /// Orbit with a fast epicycle, like a moon around a planet.
    Lunar,
    /// Slow orbit with high-frequency jitter.
    Vibration,
}

impl BuiltinPath {
    /// Every built-in path, in registration order.
    pub const ALL: [Self; 12] = [
        Self::Orbit,
        Self::Swing,
        Self::Zoom,
        Self::Spiral,
        Self::Figure8,
        Self::Circular,
        Self::RisingSpiral,
        Self::Pendulum,
        Self::Eccentric,
        Self::Tornado,
        Self::Lunar,
        Self::Vibration,
    ];

    /// Registry id.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Swing => "swing",
            Self::Zoom => "zoom",
            Self::Spiral => "spiral",
            Self::Figure8 => "figure8",
            Self::Circular => "circular",
            Self::RisingSpiral => "rising_spiral",
            Self::Pendulum => "pendulum",
            Self::Eccentric => "eccentric",
            Self::Tornado => "tornado",
            Self::Lunar => "lunar",
            Self::Vibration => "vibration",
        }
    }
}

impl CameraPath for BuiltinPath {
    fn position(&self, t: f64) -> DVec3 {
        match self {
            Self::Orbit => {
                let s = t * 0.5;
                DVec3::new(s.cos() * 10.0, 8.0, s.sin() * 10.0)
            }
            Self::Swing => {
                let angle = t.sin() * 0.3;
                DVec3::new(
                    SWING_ANCHOR.x + angle.sin() * 5.0,
                    SWING_ANCHOR.y,
                    SWING_ANCHOR.z + angle.cos() * 5.0,
                )
            }
            Self::Zoom => {
                let distance = 5.0 + t.sin() * 3.0;
                SWING_ANCHOR.normalize() * distance
            }
            Self::Spiral => {
                let radius = 8.0 + (t * 0.2).sin() * 3.0;
                let s = t * 0.7;
                let height = 5.0 + (t * 0.3).sin() * 3.0;
                DVec3::new(s.cos() * radius, height, s.sin() * radius)
            }
            Self::Figure8 => {
                let s = t * 0.5;
                DVec3::new(
                    s.sin() * 8.0,
                    8.0 + (s * 0.5).cos() * 2.0,
                    (s * 2.0).sin() * 8.0 * 0.5,
                )
            }
            Self::Circular => DVec3::new(8.0 * t.sin(), 5.0, 8.0 * t.cos()),
            Self::RisingSpiral => {
                let radius = 5.0 + t * 0.2;
                DVec3::new(radius * t.sin(), 3.0 + t * 0.3, radius * t.cos())
            }
            Self::Pendulum => {
                DVec3::new(8.0 * ((t * 1.5).sin() * 0.8).sin(), 7.0, 8.0)
            }
            Self::Eccentric => {
                let radius = 6.0 + 3.0 * (t * 2.0).sin();
                DVec3::new(
                    radius * t.sin(),
                    4.0 + 2.0 * (t * 3.0).cos(),
                    radius * t.cos(),
                )
            }
            Self::Tornado => {
                let radius = 12.0 - t * 0.15;
                DVec3::new(
                    radius * (t * 3.0).sin(),
                    10.0 - t * 0.1,
                    radius * (t * 3.0).cos(),
                )
            }
            Self::Lunar => DVec3::new(
                8.0 * t.sin() + 2.0 * (t * 12.0).sin(),
                5.0 + (t * 12.0).sin(),
                8.0 * t.cos() + 2.0 * (t * 12.0).cos(),
            ),
            Self::Vibration => DVec3::new(
                8.0 * (t * 0.1).sin() + 0.5 * (t * 20.0).sin(),
                5.0 + (t * 20.0).sin(),
                8.0 * (t * 0.1).cos() + 0.5 * (t * 20.0).cos(),
            ),
        }
    }

    fn look_at(&self, t: f64) -> DVec3 {
        match self {
            Self::RisingSpiral => DVec3::new(0.0, t * 0.1, 0.0),
            Self::Eccentric => DVec3::new((t * 0.5).sin(), 0.0, (t * 0.5).cos()),
            Self::Tornado => DVec3::new(0.0, 5.0 - t * 0.05, 0.0),
            Self::Vibration => DVec3::new(
                0.1 * (t * 10.0).sin(),
                0.1 * (t * 15.0).cos(),
                0.1 * (t * 10.0).sin(),
            ),
            _ => DVec3::ZERO,
        }
    }
}

/// Registry of named presets, built once at startup.
///
/// Lookups by unknown id are reported as [`CamrigError::UnknownPreset`]
/// rather than ignored.
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: FxHashMap<String, AnimationPreset>,
}

impl PresetLibrary {
    /// An empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            presets: FxHashMap::default(),
        }
    }

    /// A library holding every [`BuiltinPath`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut presets = FxHashMap::default();
        for path in BuiltinPath::ALL {
            let _ = presets.insert(
                path.id().to_owned(),
                AnimationPreset::new(path.id(), shared(path)),
            );
        }
        Self { presets }
    }

    /// Built-ins plus the derived presets declared in `options`, registered
    /// in declaration order.
    ///
    /// # Errors
    ///
    /// Fails on the first derived entry that names an unknown base, reuses
    /// an id, uses a reserved id, or carries a non-finite transform.
    pub fn from_options(options: &AnimationOptions) -> Result<Self, CamrigError> {
        let mut library = Self::with_builtins();
        for derived in &options.derived {
            library.register_derived(&derived.id, &derived.base, derived.transform)?;
        }
        log::info!("preset library ready: {} presets", library.len());
        Ok(library)
    }

    /// Add a preset.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::ReservedPresetId`] or
    /// [`CamrigError::DuplicatePreset`].
    pub fn register(&mut self, preset: AnimationPreset) -> Result<(), CamrigError> {
        let id = preset.id();
        if is_reserved(id) {
            return Err(CamrigError::ReservedPresetId(id.to_owned()));
        }
        if self.presets.contains_key(id) {
            return Err(CamrigError::DuplicatePreset(id.to_owned()));
        }
        log::debug!("registered preset '{id}'");
        let _ = self.presets.insert(id.to_owned(), preset);
        Ok(())
    }

    /// Derive a preset from `base` and register it as `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::UnknownPreset`] for a missing base, plus
    /// anything [`AnimationPreset::derive`] or [`register`](Self::register)
    /// rejects.
    pub fn register_derived(
        &mut self,
        id: &str,
        base: &str,
        transform: PathTransform,
    ) -> Result<(), CamrigError> {
        let derived = self.get(base)?.derive(id, transform)?;
        self.register(derived)
    }

    /// Look up a preset.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::UnknownPreset`] if `id` is not registered.
    pub fn get(&self, id: &str) -> Result<&AnimationPreset, CamrigError> {
        self.presets
            .get(id)
            .ok_or_else(|| CamrigError::UnknownPreset(id.to_owned()))
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.presets.contains_key(id)
    }

    /// Evaluate preset `id` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::UnknownPreset`] if `id` is not registered.
    pub fn evaluate(&self, id: &str, t: f64) -> Result<CameraPose, CamrigError> {
        self.get(id).map(|preset| preset.evaluate(t))
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::with_builtins()
    }
}
