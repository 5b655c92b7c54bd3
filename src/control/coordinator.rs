//! Arbitration between free control, scripted animation and transitions.

use glam::DVec3;

use super::command::{CameraCommand, InteractionSource};
use super::event::CameraEvent;
use super::feedback::FeedbackToast;
use super::ownership::{Owner, Ownership};
use crate::animation::library::{is_reserved, PresetLibrary};
use crate::animation::{AnimationDriver, CameraTransition, TransitionState};
use crate::camera::{CameraPose, CameraRig};
use crate::error::CamrigError;
use crate::options::{Options, ReleaseLookAt};

/// Id reported for "no animation".
pub const NO_ANIMATION: &str = "none";

/// Decides, every frame, which single component writes the camera pose.
///
/// Owns the preset library, the animation driver, the transition engine and
/// the feedback toast. The live camera stays with the caller and is passed
/// in as a [`CameraRig`] on every call that may touch it.
///
/// # Usage
///
/// ```ignore
/// let mut coordinator = CameraCoordinator::new(&options)?;
/// for cmd in input.handle_event(event, over_ui) {
///     coordinator.execute(cmd, &mut rig)?;
/// }
/// coordinator.frame(timing.tick(), &mut rig);
/// for event in coordinator.drain_events() {
///     publish(event);
/// }
/// ```
#[derive(Debug)]
pub struct CameraCoordinator {
    library: PresetLibrary,
    ownership: Ownership,
    driver: AnimationDriver,
    transition: CameraTransition,
    feedback: FeedbackToast,
    home: CameraPose,
    smooth_hand_in: bool,
    release_look_at: ReleaseLookAt,
    last_animated_pose: Option<CameraPose>,
    events: Vec<CameraEvent>,
}

impl CameraCoordinator {
    /// Build the coordinator, its preset library and its startup animation.
    ///
    /// # Errors
    ///
    /// Fails if `options` do not validate, a derived preset cannot be
    /// registered, or the initial animation is unknown.
    pub fn new(options: &Options) -> Result<Self, CamrigError> {
        let library = PresetLibrary::from_options(&options.animation)?;
        Self::with_library(options, library)
    }

    /// Build the coordinator around an already populated library.
    ///
    /// # Errors
    ///
    /// Fails if `options` do not validate, or with
    /// [`CamrigError::UnknownPreset`] if the initial animation is not in
    /// `library`.
    pub fn with_library(
        options: &Options,
        library: PresetLibrary,
    ) -> Result<Self, CamrigError> {
        options.validate()?;
        let animation = &options.animation;
        let mut driver = AnimationDriver::new(animation.animation_speed);

        let initial = animation.initial_animation.as_str();
        let ownership = if is_reserved(initial) {
            Ownership::new(None, true)
        } else {
            driver.activate(library.get(initial)?.clone());
            Ownership::new(Some(initial.to_owned()), false)
        };
        log::info!(
            "camera coordinator ready (initial animation: {initial})"
        );

        Ok(Self {
            library,
            ownership,
            driver,
            transition: CameraTransition::new(
                animation.transition_duration,
                animation.transition_easing,
            ),
            feedback: FeedbackToast::new(animation.feedback_duration),
            home: options.camera.home_pose(),
            smooth_hand_in: animation.smooth_hand_in,
            release_look_at: animation.release_look_at,
            last_animated_pose: None,
            events: Vec::new(),
        })
    }

    // ── Frame ──

    /// Advance one frame. Runs the feedback timer, then exactly one pose
    /// writer chosen from the ownership at the start of the frame. Returns
    /// the pose written, if any.
    ///
    /// Non-finite or negative deltas are treated as zero.
    pub fn frame<R: CameraRig + ?Sized>(
        &mut self,
        dt: f64,
        rig: &mut R,
    ) -> Option<CameraPose> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let owner = self.owner();

        if self.feedback.tick(dt) {
            self.events.push(CameraEvent::FeedbackHidden);
        }

        match owner {
            Owner::Transitioning => {
                self.transition.tick(dt, rig).then(|| rig.pose())
            }
            Owner::Animating => {
                let pose = self.driver.tick(dt, rig)?;
                self.last_animated_pose = Some(pose);
                Some(pose)
            }
            Owner::FreeControl | Owner::Frozen => None,
        }
    }

    // ── Commands ──

    /// Apply a command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation; state is left
    /// unchanged when one is returned.
    pub fn execute<R: CameraRig + ?Sized>(
        &mut self,
        command: CameraCommand,
        rig: &mut R,
    ) -> Result<(), CamrigError> {
        match command {
            CameraCommand::SelectAnimation { id } => {
                self.select_animation(&id, rig)?;
            }
            CameraCommand::SetAnimationSpeed { speed } => {
                self.set_animation_speed(speed)?;
            }
            CameraCommand::ResetCamera => self.reset_camera(rig),
            CameraCommand::ToggleMouseControls => self.toggle_mouse_controls(rig),
            CameraCommand::Interact { source } => {
                let _ = self.activate_mouse_controls_if_needed(source, rig);
            }
            CameraCommand::RotateCamera { delta } => {
                if self.owner() == Owner::FreeControl {
                    rig.rotate(delta);
                }
            }
            CameraCommand::PanCamera { delta } => {
                if self.owner() == Owner::FreeControl {
                    rig.pan(delta);
                }
            }
            CameraCommand::Zoom { delta } => {
                if self.owner() == Owner::FreeControl {
                    rig.zoom(delta);
                }
            }
            CameraCommand::TransitionTo { pose } => self.transition_to(pose, rig)?,
        }
        Ok(())
    }

    /// Run preset `id`, or stop animating for `"none"` / `"manual"`.
    ///
    /// Selecting the running preset again changes nothing. Coming from
    /// free control restarts the clock; switching between presets keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::UnknownPreset`] (also logged) if `id` is not
    /// registered.
    pub fn select_animation<R: CameraRig + ?Sized>(
        &mut self,
        id: &str,
        rig: &mut R,
    ) -> Result<(), CamrigError> {
        if is_reserved(id) {
            if self.ownership.is_animating() {
                self.transition.cancel();
                self.release(rig);
            }
            return Ok(());
        }

        let preset = match self.library.get(id) {
            Ok(preset) => preset.clone(),
            Err(e) => {
                log::warn!("{e}");
                return Err(e);
            }
        };
        if self.ownership.animation() == Some(id) {
            log::debug!("animation '{id}' already running");
            return Ok(());
        }

        let from_free_control = !self.ownership.is_animating();
        self.transition.cancel();
        self.set_mouse_controls(false);
        if from_free_control {
            self.driver.reset();
        }
        self.driver.activate(preset);
        self.ownership.set_animation(id);

        let keep_current_position = self.smooth_hand_in;
        if self.smooth_hand_in {
            if let Some(target) = self.driver.current_pose() {
                self.transition.start(target, rig);
            }
        }
        log::debug!("animation '{id}' selected");
        self.events.push(CameraEvent::AnimationChanged {
            animation: id.to_owned(),
            keep_current_position,
        });
        Ok(())
    }

    /// Change the animation clock multiplier from the next frame on.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite speeds (also logged).
    pub fn set_animation_speed(&mut self, speed: f64) -> Result<(), CamrigError> {
        self.driver.set_speed(speed).inspect_err(|e| log::warn!("{e}"))
    }

    /// Apply new options to a running coordinator.
    ///
    /// Speed, transition timing, feedback duration, home pose and the
    /// hand-in and release policies take effect immediately. The preset
    /// library, initial animation and ownership are left alone; a reset
    /// already in flight keeps heading to the old home.
    ///
    /// # Errors
    ///
    /// Fails if `options` do not validate. Nothing is applied in that case.
    pub fn apply_options(&mut self, options: &Options) -> Result<(), CamrigError> {
        options.validate().inspect_err(|e| log::warn!("{e}"))?;
        let animation = &options.animation;

        self.driver.set_speed(animation.animation_speed)?;
        self.transition.set_duration(animation.transition_duration);
        self.transition.set_easing(animation.transition_easing);
        self.feedback.set_duration(animation.feedback_duration);
        self.home = options.camera.home_pose();
        self.smooth_hand_in = animation.smooth_hand_in;
        self.release_look_at = animation.release_look_at;
        log::info!("camera options applied");
        Ok(())
    }

    /// Stop animating, hand the camera to the user and ease back home.
    ///
    /// A reset while already heading home does not restart the transition.
    pub fn reset_camera<R: CameraRig + ?Sized>(&mut self, rig: &mut R) {
        if self.stop_animation() {
            self.events.push(CameraEvent::AnimationChanged {
                animation: NO_ANIMATION.into(),
                keep_current_position: false,
            });
            self.sync_free_control(rig);
        }
        self.set_mouse_controls(true);
        self.driver.reset();

        if self.transition.target() == Some(self.home) {
            log::debug!("reset already in flight");
            return;
        }
        log::debug!("resetting camera to home pose");
        self.transition.start(self.home, rig);
    }

    /// With an animation running, release it where it is. Otherwise flip
    /// free mouse control.
    pub fn toggle_mouse_controls<R: CameraRig + ?Sized>(&mut self, rig: &mut R) {
        if self.ownership.is_animating() {
            self.transition.cancel();
            self.release(rig);
        } else {
            let enabled = !self.ownership.mouse_controls_enabled();
            self.set_mouse_controls(enabled);
        }
    }

    /// Hand the camera to the user after an interaction outside the UI.
    ///
    /// Returns `false` and does nothing if free control already owns the
    /// camera. Otherwise releases any running animation, enables mouse
    /// controls and shows the feedback toast.
    pub fn activate_mouse_controls_if_needed<R: CameraRig + ?Sized>(
        &mut self,
        source: InteractionSource,
        rig: &mut R,
    ) -> bool {
        if !self.ownership.needs_activation() {
            return false;
        }
        log::debug!("mouse controls activated by {source:?}");

        if self.ownership.is_animating() {
            self.transition.cancel();
            self.release(rig);
        } else {
            self.set_mouse_controls(true);
        }
        if self.feedback.show() {
            self.events.push(CameraEvent::FeedbackShown);
        }
        true
    }

    /// Ease the camera to an explicit pose. Ownership is not changed: if an
    /// animation is running it resumes once the transition completes.
    ///
    /// # Errors
    ///
    /// Returns [`CamrigError::NonFinite`] (also logged) for a pose with
    /// NaN or infinite components.
    pub fn transition_to<R: CameraRig + ?Sized>(
        &mut self,
        pose: CameraPose,
        rig: &mut R,
    ) -> Result<(), CamrigError> {
        if !pose.is_finite() {
            let e = CamrigError::NonFinite("transition target".into());
            log::warn!("{e}");
            return Err(e);
        }
        self.transition.start(pose, rig);
        Ok(())
    }

    // ── Queries ──

    /// Who writes the pose this frame.
    #[must_use]
    pub fn owner(&self) -> Owner {
        self.ownership.owner(self.transition.is_active())
    }

    /// Id of the running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&str> {
        self.ownership.animation()
    }

    /// Id of the running animation, `"none"` when stopped.
    #[must_use]
    pub fn animation_id(&self) -> &str {
        self.ownership.animation().unwrap_or(NO_ANIMATION)
    }

    /// Whether free mouse control is switched on.
    #[must_use]
    pub fn mouse_controls_enabled(&self) -> bool {
        self.ownership.mouse_controls_enabled()
    }

    /// Whether an interaction outside the UI would hand over the camera.
    #[must_use]
    pub fn needs_activation(&self) -> bool {
        self.ownership.needs_activation()
    }

    /// Whether the user is free to orbit right now (no animation, mouse
    /// controls on).
    #[must_use]
    pub fn is_mouse_controls_active(&self) -> bool {
        !self.ownership.is_animating() && self.ownership.mouse_controls_enabled()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// Snapshot of the current or last transition.
    #[must_use]
    pub fn transition_state(&self) -> &TransitionState {
        self.transition.state()
    }

    /// Current animation clock.
    #[must_use]
    pub fn animation_time(&self) -> f64 {
        self.driver.elapsed()
    }

    /// Current animation clock multiplier.
    #[must_use]
    pub fn animation_speed(&self) -> f64 {
        self.driver.speed()
    }

    /// The last pose the animation driver wrote.
    #[must_use]
    pub fn last_animated_pose(&self) -> Option<CameraPose> {
        self.last_animated_pose
    }

    /// Whether the feedback toast is up.
    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.feedback.is_visible()
    }

    /// Pose the reset command returns to.
    #[must_use]
    pub fn home_pose(&self) -> CameraPose {
        self.home
    }

    /// The preset registry.
    #[must_use]
    pub fn library(&self) -> &PresetLibrary {
        &self.library
    }

    /// Take every notification emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Internals ──

    /// Clear the running animation and idle the driver. Returns whether an
    /// animation was running.
    fn stop_animation(&mut self) -> bool {
        let Some(previous) = self.ownership.take_animation() else {
            return false;
        };
        log::debug!("animation '{previous}' stopped");
        self.driver.deactivate();
        self.driver.reset();
        true
    }

    /// Stop the running animation where it is and give the camera to free
    /// control, pivoting per the release policy.
    fn release<R: CameraRig + ?Sized>(&mut self, rig: &mut R) {
        if self.stop_animation() {
            self.events.push(CameraEvent::AnimationChanged {
                animation: NO_ANIMATION.into(),
                keep_current_position: true,
            });
        }
        self.sync_free_control(rig);
        self.set_mouse_controls(true);
    }

    /// Point the rig's free orbit control at the pivot the release policy
    /// picks.
    fn sync_free_control<R: CameraRig + ?Sized>(&self, rig: &mut R) {
        let look_at = match self.release_look_at {
            ReleaseLookAt::Preserve => rig.pose().look_at,
            ReleaseLookAt::Origin => DVec3::ZERO,
        };
        rig.sync_free_control(look_at);
    }

    fn set_mouse_controls(&mut self, enabled: bool) {
        if self.ownership.set_mouse_controls_enabled(enabled) {
            log::debug!("mouse controls {}", if enabled { "on" } else { "off" });
            self.events.push(CameraEvent::MouseControlsToggled { enabled });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use glam::DVec2;

    use super::*;

    /// Records every write so tests can assert on who touched the camera.
    #[derive(Debug, Default)]
    struct RecordingRig {
        pose: CameraPose,
        writes: usize,
        syncs: Vec<DVec3>,
        gestures: usize,
    }

    impl RecordingRig {
        fn at(pose: CameraPose) -> Self {
            Self {
                pose,
                ..Self::default()
            }
        }
    }

    impl CameraRig for RecordingRig {
        fn pose(&self) -> CameraPose {
            self.pose
        }
        fn set_pose(&mut self, pose: CameraPose) {
            self.pose = pose;
            self.writes += 1;
        }
        fn sync_free_control(&mut self, look_at: DVec3) {
            self.pose.look_at = look_at;
            self.syncs.push(look_at);
        }
        fn rotate(&mut self, _delta: DVec2) {
            self.gestures += 1;
        }
        fn pan(&mut self, _delta: DVec2) {
            self.gestures += 1;
        }
        fn zoom(&mut self, _delta: f64) {
            self.gestures += 1;
        }
    }

    fn home() -> CameraPose {
        CameraPose::from_arrays([8.0, 8.0, 8.0], [0.0, 0.0, 0.0])
    }

    fn setup(options: &Options) -> (CameraCoordinator, RecordingRig) {
        (CameraCoordinator::new(options).unwrap(), RecordingRig::at(home()))
    }

    fn run(coordinator: &mut CameraCoordinator, rig: &mut RecordingRig, seconds: f64) {
        let frames = (seconds * 60.0).round() as usize;
        for _ in 0..frames {
            let _ = coordinator.frame(1.0 / 60.0, rig);
        }
    }

    fn free_start() -> Options {
        let mut options = Options::default();
        options.animation.initial_animation = "none".into();
        options
    }

    #[test]
    fn starts_animating_orbit_with_mouse_off() {
        let (coordinator, _) = setup(&Options::default());
        assert_eq!(coordinator.owner(), Owner::Animating);
        assert_eq!(coordinator.animation_id(), "orbit");
        assert!(!coordinator.mouse_controls_enabled());
        assert_eq!(coordinator.animation_speed(), 0.2);
    }

    #[test]
    fn unknown_initial_animation_fails() {
        let mut options = Options::default();
        options.animation.initial_animation = "warp".into();
        assert!(matches!(
            CameraCoordinator::new(&options),
            Err(CamrigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn with_library_rejects_negative_speed() {
        let mut options = Options::default();
        options.animation.animation_speed = -1.0;
        assert!(matches!(
            CameraCoordinator::with_library(&options, PresetLibrary::with_builtins()),
            Err(CamrigError::InvalidOptions(_))
        ));
    }

    #[test]
    fn apply_options_updates_running_coordinator() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);

        let mut options = Options::default();
        options.animation.animation_speed = 1.0;
        options.animation.transition_duration = 2.0;
        options.animation.release_look_at = ReleaseLookAt::Origin;
        options.camera.home_position = [0.0, 5.0, 10.0];
        c.apply_options(&options).unwrap();
        assert_eq!(c.animation_speed(), 1.0);
        assert_eq!(c.home_pose().position, DVec3::new(0.0, 5.0, 10.0));
        assert_eq!(c.animation_id(), "orbit");

        c.reset_camera(&mut rig);
        assert_eq!(rig.syncs, vec![DVec3::ZERO]);
        assert_eq!(c.transition_state().duration, 2.0);
        run(&mut c, &mut rig, 1.0);
        assert!(c.is_transitioning());
        run(&mut c, &mut rig, 1.1);
        assert_eq!(rig.pose(), c.home_pose());
    }

    #[test]
    fn apply_options_rejects_invalid_and_keeps_state() {
        let (mut c, _) = setup(&Options::default());
        let mut options = Options::default();
        options.animation.animation_speed = 3.0;
        options.animation.feedback_duration = -1.0;
        assert!(matches!(
            c.apply_options(&options),
            Err(CamrigError::InvalidOptions(_))
        ));
        assert_eq!(c.animation_speed(), 0.2);
    }

    #[test]
    fn click_out_of_orbit_hands_over_in_place() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);
        let animated = c.last_animated_pose().unwrap();
        assert_eq!(rig.pose(), animated);

        assert!(c.activate_mouse_controls_if_needed(InteractionSource::Click, &mut rig));
        assert_eq!(
            c.drain_events(),
            vec![
                CameraEvent::AnimationChanged {
                    animation: "none".into(),
                    keep_current_position: true,
                },
                CameraEvent::MouseControlsToggled { enabled: true },
                CameraEvent::FeedbackShown,
            ]
        );
        assert_eq!(c.owner(), Owner::FreeControl);
        assert_eq!(c.animation_time(), 0.0);
        assert_eq!(rig.pose(), animated);
        assert_eq!(rig.syncs, vec![animated.look_at]);

        let writes = rig.writes;
        run(&mut c, &mut rig, 2.0);
        assert_eq!(rig.writes, writes);
        assert!(c.feedback_visible());
        run(&mut c, &mut rig, 0.6);
        assert!(!c.feedback_visible());
        assert_eq!(c.drain_events(), vec![CameraEvent::FeedbackHidden]);
    }

    #[test]
    fn repeated_interaction_is_absorbed() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 0.5);
        assert!(c.activate_mouse_controls_if_needed(InteractionSource::Wheel, &mut rig));
        let _ = c.drain_events();

        assert!(!c.activate_mouse_controls_if_needed(InteractionSource::Click, &mut rig));
        c.execute(
            CameraCommand::Interact {
                source: InteractionSource::Escape,
            },
            &mut rig,
        )
        .unwrap();
        assert!(c.drain_events().is_empty());
        assert_eq!(rig.syncs.len(), 1);
    }

    #[test]
    fn interaction_while_frozen_only_enables_mouse() {
        let (mut c, mut rig) = setup(&free_start());
        c.toggle_mouse_controls(&mut rig);
        assert_eq!(c.owner(), Owner::Frozen);
        let _ = c.drain_events();

        assert!(c.activate_mouse_controls_if_needed(InteractionSource::Click, &mut rig));
        assert_eq!(
            c.drain_events(),
            vec![
                CameraEvent::MouseControlsToggled { enabled: true },
                CameraEvent::FeedbackShown,
            ]
        );
        assert!(rig.syncs.is_empty());
    }

    #[test]
    fn reset_from_spiral_eases_home() {
        let (mut c, mut rig) = setup(&free_start());
        c.select_animation("spiral", &mut rig).unwrap();
        run(&mut c, &mut rig, 3.0);
        let _ = c.drain_events();

        let released_at = rig.pose().look_at;
        c.reset_camera(&mut rig);
        assert_eq!(rig.syncs, vec![released_at]);
        assert_eq!(
            c.drain_events(),
            vec![
                CameraEvent::AnimationChanged {
                    animation: "none".into(),
                    keep_current_position: false,
                },
                CameraEvent::MouseControlsToggled { enabled: true },
            ]
        );
        assert_eq!(c.owner(), Owner::Transitioning);
        assert_eq!(c.animation_time(), 0.0);

        run(&mut c, &mut rig, 0.5);
        assert_ne!(rig.pose(), home());
        run(&mut c, &mut rig, 0.6);
        assert_eq!(rig.pose(), home());
        assert_eq!(c.owner(), Owner::FreeControl);
    }

    #[test]
    fn repeated_reset_does_not_restart_transition() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);
        c.reset_camera(&mut rig);
        run(&mut c, &mut rig, 0.5);
        let progress = c.transition_state().progress;
        let _ = c.drain_events();

        c.reset_camera(&mut rig);
        assert!(c.drain_events().is_empty());
        assert_eq!(c.transition_state().progress, progress);
    }

    #[test]
    fn figure8_reaches_closed_form_at_two_pi() {
        let (mut c, mut rig) = setup(&free_start());
        c.set_animation_speed(1.0).unwrap();
        c.select_animation("figure8", &mut rig).unwrap();
        let _ = c.frame(PI, &mut rig);
        let pose = c.frame(PI, &mut rig).unwrap();

        assert!((c.animation_time() - 2.0 * PI).abs() < 1e-12);
        assert!(pose.position.x.abs() < 1e-9);
        assert!((pose.position.y - 8.0).abs() < 1e-9);
        assert!(pose.position.z.abs() < 1e-9);
        assert_eq!(pose.look_at, DVec3::ZERO);
        assert_eq!(rig.pose(), pose);
    }

    #[test]
    fn selecting_running_preset_is_noop() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);
        let t = c.animation_time();
        c.select_animation("orbit", &mut rig).unwrap();
        assert!(c.drain_events().is_empty());
        assert_eq!(c.animation_time(), t);
    }

    #[test]
    fn switching_presets_keeps_clock() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);
        let t = c.animation_time();
        c.select_animation("tornado", &mut rig).unwrap();
        assert_eq!(c.animation_time(), t);
        assert_eq!(
            c.drain_events(),
            vec![CameraEvent::AnimationChanged {
                animation: "tornado".into(),
                keep_current_position: false,
            }]
        );
    }

    #[test]
    fn selecting_from_free_control_restarts_clock_and_disables_mouse() {
        let (mut c, mut rig) = setup(&free_start());
        c.select_animation("lunar", &mut rig).unwrap();
        assert_eq!(c.animation_time(), 0.0);
        assert_eq!(
            c.drain_events(),
            vec![
                CameraEvent::MouseControlsToggled { enabled: false },
                CameraEvent::AnimationChanged {
                    animation: "lunar".into(),
                    keep_current_position: false,
                },
            ]
        );
    }

    #[test]
    fn unknown_preset_leaves_state_alone() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 0.5);
        let t = c.animation_time();
        let err = c
            .execute(
                CameraCommand::SelectAnimation { id: "warp".into() },
                &mut rig,
            )
            .unwrap_err();
        assert!(matches!(err, CamrigError::UnknownPreset(_)));
        assert_eq!(c.animation_id(), "orbit");
        assert_eq!(c.animation_time(), t);
        assert!(c.drain_events().is_empty());
    }

    #[test]
    fn none_and_manual_stop_in_place() {
        for word in ["none", "manual"] {
            let (mut c, mut rig) = setup(&Options::default());
            run(&mut c, &mut rig, 1.0);
            let pose = rig.pose();
            c.select_animation(word, &mut rig).unwrap();
            assert_eq!(c.owner(), Owner::FreeControl);
            assert_eq!(rig.pose(), pose);

            // Stopping again changes nothing.
            let _ = c.drain_events();
            c.select_animation(word, &mut rig).unwrap();
            assert!(c.drain_events().is_empty());
        }
    }

    #[test]
    fn toggle_releases_running_animation() {
        let (mut c, mut rig) = setup(&Options::default());
        run(&mut c, &mut rig, 1.0);
        let pose = rig.pose();
        c.execute(CameraCommand::ToggleMouseControls, &mut rig).unwrap();
        assert_eq!(c.owner(), Owner::FreeControl);
        assert_eq!(rig.pose(), pose);
        assert_eq!(
            c.drain_events(),
            vec![
                CameraEvent::AnimationChanged {
                    animation: "none".into(),
                    keep_current_position: true,
                },
                CameraEvent::MouseControlsToggled { enabled: true },
            ]
        );
        assert!(!c.feedback_visible());

        c.execute(CameraCommand::ToggleMouseControls, &mut rig).unwrap();
        assert_eq!(c.owner(), Owner::Frozen);
    }

    #[test]
    fn origin_release_policy_recenters_pivot() {
        let mut options = Options::default();
        options.animation.initial_animation = "eccentric".into();
        options.animation.release_look_at = ReleaseLookAt::Origin;
        let (mut c, mut rig) = setup(&options);
        run(&mut c, &mut rig, 2.0);
        assert_ne!(rig.pose().look_at, DVec3::ZERO);

        c.toggle_mouse_controls(&mut rig);
        assert_eq!(rig.syncs, vec![DVec3::ZERO]);
        assert_eq!(rig.pose().look_at, DVec3::ZERO);
    }

    #[test]
    fn gestures_only_reach_free_control() {
        let (mut c, mut rig) = setup(&Options::default());
        let rotate = CameraCommand::RotateCamera {
            delta: DVec2::new(5.0, 0.0),
        };
        c.execute(rotate.clone(), &mut rig).unwrap();
        c.execute(CameraCommand::Zoom { delta: 1.0 }, &mut rig).unwrap();
        assert_eq!(rig.gestures, 0);

        c.toggle_mouse_controls(&mut rig);
        c.execute(rotate, &mut rig).unwrap();
        c.execute(
            CameraCommand::PanCamera {
                delta: DVec2::new(1.0, 1.0),
            },
            &mut rig,
        )
        .unwrap();
        assert_eq!(rig.gestures, 2);

        c.reset_camera(&mut rig);
        c.execute(CameraCommand::Zoom { delta: -1.0 }, &mut rig).unwrap();
        assert_eq!(rig.gestures, 2);
    }

    #[test]
    fn smooth_hand_in_eases_onto_preset() {
        let mut options = free_start();
        options.animation.smooth_hand_in = true;
        let (mut c, mut rig) = setup(&options);

        c.select_animation("orbit", &mut rig).unwrap();
        assert_eq!(
            c.drain_events().last(),
            Some(&CameraEvent::AnimationChanged {
                animation: "orbit".into(),
                keep_current_position: true,
            })
        );
        assert_eq!(c.owner(), Owner::Transitioning);

        let mut frames = 0;
        while c.is_transitioning() {
            let _ = c.frame(1.0 / 60.0, &mut rig);
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(c.owner(), Owner::Animating);
        assert_eq!(
            rig.pose(),
            c.library().evaluate("orbit", 0.0).unwrap()
        );
        assert_eq!(c.animation_time(), 0.0);
    }

    #[test]
    fn transition_to_rejects_non_finite_pose() {
        let (mut c, mut rig) = setup(&free_start());
        let bad = CameraPose::from_arrays([f64::NAN, 0.0, 0.0], [0.0; 3]);
        assert!(matches!(
            c.execute(CameraCommand::TransitionTo { pose: bad }, &mut rig),
            Err(CamrigError::NonFinite(_))
        ));
        assert!(!c.is_transitioning());

        let target = CameraPose::from_arrays([0.0, 12.0, 1.0], [0.0, 1.0, 0.0]);
        c.transition_to(target, &mut rig).unwrap();
        run(&mut c, &mut rig, 1.1);
        assert_eq!(rig.pose(), target);
    }

    #[test]
    fn bad_delta_is_treated_as_zero() {
        let (mut c, mut rig) = setup(&Options::default());
        let _ = c.frame(f64::NAN, &mut rig);
        let _ = c.frame(-1.0, &mut rig);
        assert_eq!(c.animation_time(), 0.0);
        assert!(rig.pose().is_finite());
    }

    #[test]
    fn speed_change_applies_from_next_frame() {
        let (mut c, mut rig) = setup(&Options::default());
        let _ = c.frame(1.0, &mut rig);
        c.execute(CameraCommand::SetAnimationSpeed { speed: 1.0 }, &mut rig)
            .unwrap();
        assert!((c.animation_time() - 0.2).abs() < 1e-12);
        let _ = c.frame(1.0, &mut rig);
        assert!((c.animation_time() - 1.2).abs() < 1e-12);
        assert!(c.set_animation_speed(f64::INFINITY).is_err());
    }
}
