//! Who may write the camera pose this frame.

/// The single pose writer for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The user drives the camera through orbit gestures.
    FreeControl,
    /// The animation driver writes the preset pose.
    Animating,
    /// A transition is in flight; it takes priority over everything else.
    Transitioning,
    /// Nobody writes: no animation, no transition, mouse controls off.
    Frozen,
}

/// The persistent half of the ownership state. Combined with whether a
/// transition is in flight it yields the frame's [`Owner`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ownership {
    animation: Option<String>,
    mouse_controls_enabled: bool,
}

impl Ownership {
    /// Start with `animation` running (or not) and mouse controls set.
    #[must_use]
    pub fn new(animation: Option<String>, mouse_controls_enabled: bool) -> Self {
        Self {
            animation,
            mouse_controls_enabled,
        }
    }

    /// Derive the owner.
    #[must_use]
    pub fn owner(&self, transition_active: bool) -> Owner {
        if transition_active {
            Owner::Transitioning
        } else if self.animation.is_some() {
            Owner::Animating
        } else if self.mouse_controls_enabled {
            Owner::FreeControl
        } else {
            Owner::Frozen
        }
    }

    /// Id of the running animation.
    #[must_use]
    pub fn animation(&self) -> Option<&str> {
        self.animation.as_deref()
    }

    /// Whether an animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Replace the running animation id.
    pub fn set_animation(&mut self, id: impl Into<String>) {
        self.animation = Some(id.into());
    }

    /// Clear the running animation, returning the old id.
    pub fn take_animation(&mut self) -> Option<String> {
        self.animation.take()
    }

    /// Whether free mouse control is switched on.
    #[must_use]
    pub fn mouse_controls_enabled(&self) -> bool {
        self.mouse_controls_enabled
    }

    /// Set the mouse-controls flag. Returns whether it changed.
    pub fn set_mouse_controls_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.mouse_controls_enabled != enabled;
        self.mouse_controls_enabled = enabled;
        changed
    }

    /// Whether an interaction outside the UI would change anything: an
    /// animation is running or free control is off.
    #[must_use]
    pub fn needs_activation(&self) -> bool {
        self.animation.is_some() || !self.mouse_controls_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_outranks_everything() {
        let animating = Ownership::new(Some("orbit".into()), false);
        assert_eq!(animating.owner(true), Owner::Transitioning);
        assert_eq!(animating.owner(false), Owner::Animating);
    }

    #[test]
    fn free_control_needs_mouse_and_no_animation() {
        assert_eq!(Ownership::new(None, true).owner(false), Owner::FreeControl);
        assert_eq!(Ownership::new(None, false).owner(false), Owner::Frozen);
        assert_eq!(
            Ownership::new(Some("swing".into()), true).owner(false),
            Owner::Animating
        );
    }

    #[test]
    fn activation_need() {
        assert!(!Ownership::new(None, true).needs_activation());
        assert!(Ownership::new(None, false).needs_activation());
        assert!(Ownership::new(Some("zoom".into()), true).needs_activation());
    }

    #[test]
    fn mouse_flag_reports_changes_only() {
        let mut ownership = Ownership::new(None, false);
        assert!(ownership.set_mouse_controls_enabled(true));
        assert!(!ownership.set_mouse_controls_enabled(true));
    }
}
