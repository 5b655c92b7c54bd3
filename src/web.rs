//! Browser entry point.
//!
//! [`SceneCamera`] bundles the coordinator, an [`OrbitController`], the
//! input processor and frame timing behind a `wasm-bindgen` class. Every
//! [`CameraEvent`] the coordinator emits is re-dispatched on `window` as a
//! `CustomEvent` whose `detail` is the event serialized as a JSON string.

use wasm_bindgen::prelude::*;

use crate::camera::{CameraPose, CameraRig, OrbitController};
use crate::control::{CameraCommand, CameraCoordinator, CameraEvent};
use crate::error::CamrigError;
use crate::input::{InputEvent, InputProcessor, MouseButton};
use crate::options::Options;
use crate::util::FrameTiming;

impl From<CamrigError> for JsValue {
    fn from(e: CamrigError) -> Self {
        Self::from_str(&e.to_string())
    }
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The scene editor's camera, driven from JavaScript.
#[wasm_bindgen]
pub struct SceneCamera {
    coordinator: CameraCoordinator,
    rig: OrbitController,
    input: InputProcessor,
    timing: FrameTiming,
}

#[wasm_bindgen]
impl SceneCamera {
    /// Build the camera from TOML options (empty for defaults) and the
    /// canvas size in pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options_toml: &str,
        width: u32,
        height: u32,
    ) -> Result<SceneCamera, JsValue> {
        let options = if options_toml.trim().is_empty() {
            Options::default()
        } else {
            Options::from_toml_str(options_toml)?
        };
        let coordinator = CameraCoordinator::new(&options)?;
        let mut rig = OrbitController::new(&options.camera, 1.0);
        rig.resize(width, height);
        Ok(Self {
            coordinator,
            rig,
            input: InputProcessor::with_key_bindings(options.keybindings),
            timing: FrameTiming::new(options.animation.max_frame_delta),
        })
    }

    /// Apply TOML options to the running camera. The preset library and
    /// keybindings are left as built.
    #[wasm_bindgen(js_name = applyOptions)]
    pub fn apply_options(&mut self, options_toml: &str) -> Result<(), JsValue> {
        let options = Options::from_toml_str(options_toml)?;
        self.coordinator.apply_options(&options)?;
        self.rig.apply_options(&options.camera);
        self.timing = FrameTiming::new(options.animation.max_frame_delta);
        Ok(())
    }

    /// Select a preset, or `"none"` / `"manual"` to stop animating.
    #[wasm_bindgen(js_name = changeAnimation)]
    pub fn change_animation(&mut self, id: &str) -> Result<(), JsValue> {
        self.run(CameraCommand::SelectAnimation { id: id.to_owned() })
    }

    /// Change the animation clock multiplier.
    #[wasm_bindgen(js_name = changeAnimationSpeed)]
    pub fn change_animation_speed(&mut self, speed: f64) -> Result<(), JsValue> {
        self.run(CameraCommand::SetAnimationSpeed { speed })
    }

    /// Stop animating and ease back to the home pose.
    #[wasm_bindgen(js_name = resetCamera)]
    pub fn reset_camera(&mut self) -> Result<(), JsValue> {
        self.run(CameraCommand::ResetCamera)
    }

    /// Flip free control, or release a running animation.
    #[wasm_bindgen(js_name = toggleMouseControls)]
    pub fn toggle_mouse_controls(&mut self) -> Result<(), JsValue> {
        self.run(CameraCommand::ToggleMouseControls)
    }

    /// Ease to an explicit pose.
    #[wasm_bindgen(js_name = transitionTo)]
    pub fn transition_to(
        &mut self,
        position: &[f64],
        look_at: &[f64],
    ) -> Result<(), JsValue> {
        let (Ok(position), Ok(look_at)) =
            (<[f64; 3]>::try_from(position), <[f64; 3]>::try_from(look_at))
        else {
            return Err(JsValue::from_str("poses need three components"));
        };
        let pose = CameraPose::from_arrays(position, look_at);
        self.run(CameraCommand::TransitionTo { pose })
    }

    /// Pointer moved over the canvas.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.feed(InputEvent::CursorMoved { x, y }, false)
    }

    /// Pointer pressed; `button` is `MouseEvent.button`.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, button: i16, over_ui: bool) -> Result<(), JsValue> {
        let button = MouseButton::from_dom(button);
        self.feed(InputEvent::MouseButton { button, pressed: true }, over_ui)
    }

    /// Pointer released.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, button: i16) -> Result<(), JsValue> {
        let button = MouseButton::from_dom(button);
        self.feed(InputEvent::MouseButton { button, pressed: false }, false)
    }

    /// Wheel turned; positive zooms in.
    pub fn wheel(&mut self, delta: f64, over_ui: bool) -> Result<(), JsValue> {
        self.feed(InputEvent::Scroll { delta }, over_ui)
    }

    /// Shift key state changed.
    #[wasm_bindgen(js_name = setShift)]
    pub fn set_shift(&mut self, shift: bool) -> Result<(), JsValue> {
        self.feed(InputEvent::ModifiersChanged { shift }, false)
    }

    /// Key pressed; `code` is `KeyboardEvent.code`.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> Result<(), JsValue> {
        match self.input.handle_key_press(code) {
            Some(command) => self.run(command),
            None => Ok(()),
        }
    }

    /// Advance one frame by `dt` seconds.
    pub fn frame(&mut self, dt: f64) {
        let _ = self.coordinator.frame(dt, &mut self.rig);
        self.flush_events();
    }

    /// Advance one frame by the wall-clock time since the last call.
    #[wasm_bindgen(js_name = frameNow)]
    pub fn frame_now(&mut self) {
        let dt = self.timing.tick();
        self.frame(dt);
    }

    /// Canvas resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    /// Camera position `[x, y, z]`.
    #[must_use]
    pub fn position(&self) -> Vec<f64> {
        self.rig.pose().position.to_array().to_vec()
    }

    /// Look-at target `[x, y, z]`.
    #[wasm_bindgen(js_name = lookAt)]
    #[must_use]
    pub fn look_at(&self) -> Vec<f64> {
        self.rig.pose().look_at.to_array().to_vec()
    }

    /// Column-major view-projection matrix.
    #[wasm_bindgen(js_name = viewProjection)]
    #[must_use]
    pub fn view_projection(&self) -> Vec<f64> {
        self.rig.camera.build_matrix().to_cols_array().to_vec()
    }

    /// Running animation id, `"none"` when stopped.
    #[wasm_bindgen(js_name = currentAnimation)]
    #[must_use]
    pub fn current_animation(&self) -> String {
        self.coordinator.animation_id().to_owned()
    }

    /// Whether free mouse control is on.
    #[wasm_bindgen(js_name = mouseControlsEnabled)]
    #[must_use]
    pub fn mouse_controls_enabled(&self) -> bool {
        self.coordinator.mouse_controls_enabled()
    }

    /// Current animation clock multiplier.
    #[wasm_bindgen(js_name = animationSpeed)]
    #[must_use]
    pub fn animation_speed(&self) -> f64 {
        self.coordinator.animation_speed()
    }

    /// Registered preset ids, sorted.
    #[wasm_bindgen(js_name = presetIds)]
    #[must_use]
    pub fn preset_ids(&self) -> Vec<String> {
        self.coordinator
            .library()
            .ids()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Smoothed frames per second measured by [`frame_now`](Self::frame_now).
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.timing.fps()
    }

    /// JSON schema of the UI-exposed options.
    #[wasm_bindgen(js_name = optionsSchema)]
    #[must_use]
    pub fn options_schema() -> String {
        serde_json::to_string(&Options::json_schema()).unwrap_or_default()
    }
}

impl SceneCamera {
    fn run(&mut self, command: CameraCommand) -> Result<(), JsValue> {
        let result = self.coordinator.execute(command, &mut self.rig);
        self.flush_events();
        result.map_err(JsValue::from)
    }

    fn feed(&mut self, event: InputEvent, over_ui: bool) -> Result<(), JsValue> {
        for command in self.input.handle_event(event, over_ui) {
            self.run(command)?;
        }
        Ok(())
    }

    fn flush_events(&mut self) {
        for event in self.coordinator.drain_events() {
            if let Err(e) = dispatch(&event) {
                log::warn!("failed to dispatch {}: {e:?}", event.dom_name());
            }
        }
    }
}

fn dispatch(event: &CameraEvent) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let detail = serde_json::to_string(event)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&detail));
    let custom =
        web_sys::CustomEvent::new_with_event_init_dict(event.dom_name(), &init)?;
    let _ = window.dispatch_event(&custom)?;
    Ok(())
}
