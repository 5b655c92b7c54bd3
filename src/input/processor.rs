//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the coordinator's
//! [`execute`](crate::CameraCoordinator::execute) method.

use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::PointerState;
use crate::control::{CameraCommand, InteractionSource};

/// Maps physical key strings to [`CameraCommand`] variants.
///
/// Key strings use the DOM `KeyboardEvent.code` format: `"KeyH"`,
/// `"Escape"`, etc.
///
/// Only *discrete* commands make sense as key bindings; parameterized
/// commands like `RotateCamera` are produced by the pointer gesture
/// interpreter, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`CameraCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Stop animating and ease back to the home pose.
    ResetCamera,
    /// Flip free mouse control.
    ToggleMouseControls,
    /// Hand the camera to the user, as a click outside the UI would.
    Escape,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`CameraCommand`].
    fn to_command(self) -> CameraCommand {
        match self {
            Self::ResetCamera => CameraCommand::ResetCamera,
            Self::ToggleMouseControls => CameraCommand::ToggleMouseControls,
            Self::Escape => CameraCommand::Interact {
                source: InteractionSource::Escape,
            },
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyCommandTag::Escape),
            ("KeyH".into(), KeyCommandTag::ResetCamera),
            ("KeyM".into(), KeyCommandTag::ToggleMouseControls),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraCommand> {
        self.tag(key).map(KeyCommandTag::to_command)
    }

    /// Look up the bound tag for a physical key string.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `tag`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`CameraCommand`]s.
///
/// Owns all transient input state (pointer position, drag detection,
/// modifier keys) and the keyboard binding map.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event, pointer_over_ui) {
///     coordinator.execute(cmd, &mut rig)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyH") {
///     coordinator.execute(cmd, &mut rig)?;
/// }
/// ```
pub struct InputProcessor {
    /// Pointer tracking and drag state.
    state: PointerState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PointerState::new(),
            shift_pressed: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position.
    #[must_use]
    pub fn pointer_position(&self) -> DVec2 {
        self.state.position
    }

    /// Whether a canvas drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CameraCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return the commands it produces, in
    /// the order they should be executed.
    ///
    /// `over_ui` says whether the pointer is over a UI element; presses and
    /// wheel turns there never reach the camera.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        over_ui: bool,
    ) -> Vec<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(DVec2::new(x, y)).into_iter().collect()
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, over_ui)
                    .into_iter()
                    .collect()
            }
            InputEvent::Scroll { delta } => {
                if over_ui || delta == 0.0 {
                    return Vec::new();
                }
                vec![
                    CameraCommand::Interact {
                        source: InteractionSource::Wheel,
                    },
                    CameraCommand::Zoom { delta },
                ]
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera gesture.
    fn handle_cursor_moved(&mut self, position: DVec2) -> Option<CameraCommand> {
        let delta = self.state.handle_position(position);
        if delta == DVec2::ZERO {
            return None;
        }

        match self.state.drag_button? {
            MouseButton::Left if !self.shift_pressed => {
                Some(CameraCommand::RotateCamera { delta })
            }
            MouseButton::Left | MouseButton::Right => {
                Some(CameraCommand::PanCamera { delta })
            }
            MouseButton::Middle => Some(CameraCommand::Zoom { delta: -delta.y }),
        }
    }

    /// A press on the canvas hands the camera to the user and starts a drag.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        over_ui: bool,
    ) -> Option<CameraCommand> {
        if !pressed {
            let _ = self.state.release(button);
            return None;
        }
        if over_ui {
            return None;
        }
        self.state.press(button);
        Some(CameraCommand::Interact {
            source: InteractionSource::Click,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(processor: &mut InputProcessor, over_ui: bool) -> Vec<CameraCommand> {
        processor.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            over_ui,
        )
    }

    fn move_to(processor: &mut InputProcessor, x: f64, y: f64) -> Vec<CameraCommand> {
        processor.handle_event(InputEvent::CursorMoved { x, y }, false)
    }

    #[test]
    fn canvas_press_is_an_interaction() {
        let mut p = InputProcessor::new();
        assert_eq!(
            press(&mut p, false),
            vec![CameraCommand::Interact {
                source: InteractionSource::Click
            }]
        );
    }

    #[test]
    fn ui_press_is_ignored_and_does_not_drag() {
        let mut p = InputProcessor::new();
        let _ = move_to(&mut p, 0.0, 0.0);
        assert!(press(&mut p, true).is_empty());
        assert!(move_to(&mut p, 30.0, 0.0).is_empty());
    }

    #[test]
    fn drag_rotates_and_shift_drag_pans() {
        let mut p = InputProcessor::new();
        let _ = move_to(&mut p, 10.0, 10.0);
        let _ = press(&mut p, false);
        assert_eq!(
            move_to(&mut p, 14.0, 7.0),
            vec![CameraCommand::RotateCamera {
                delta: DVec2::new(4.0, -3.0)
            }]
        );
        assert!(p.is_dragging());

        let _ = p.handle_event(InputEvent::ModifiersChanged { shift: true }, false);
        assert_eq!(
            move_to(&mut p, 15.0, 7.0),
            vec![CameraCommand::PanCamera {
                delta: DVec2::new(1.0, 0.0)
            }]
        );

        let _ = p.handle_event(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            false,
        );
        assert!(move_to(&mut p, 40.0, 40.0).is_empty());
        assert!(!p.is_dragging());
    }

    #[test]
    fn wheel_outside_ui_interacts_then_zooms() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 1.5 }, false),
            vec![
                CameraCommand::Interact {
                    source: InteractionSource::Wheel
                },
                CameraCommand::Zoom { delta: 1.5 },
            ]
        );
        assert!(p.handle_event(InputEvent::Scroll { delta: 1.5 }, true).is_empty());
    }

    #[test]
    fn default_key_bindings() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_key_press("Escape"),
            Some(CameraCommand::Interact {
                source: InteractionSource::Escape
            })
        );
        assert_eq!(p.handle_key_press("KeyH"), Some(CameraCommand::ResetCamera));
        assert_eq!(
            p.handle_key_press("KeyM"),
            Some(CameraCommand::ToggleMouseControls)
        );
        assert_eq!(p.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn bindings_are_reconfigurable_and_serializable() {
        let mut p = InputProcessor::new();
        p.key_bindings_mut().unbind("KeyH");
        p.key_bindings_mut().bind("KeyR", KeyCommandTag::ResetCamera);
        assert_eq!(p.handle_key_press("KeyH"), None);
        assert_eq!(p.handle_key_press("KeyR"), Some(CameraCommand::ResetCamera));

        let json = serde_json::to_value(p.key_bindings()).unwrap();
        assert_eq!(json["bindings"]["KeyR"], "reset_camera");
        let back: KeyBindings = serde_json::from_value(json).unwrap();
        assert_eq!(&back, p.key_bindings());
    }
}
