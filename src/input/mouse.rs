use glam::DVec2;

use super::event::MouseButton;

/// Movement (in pixels, squared) after which a press counts as a drag.
const DRAG_THRESHOLD_SQ: f64 = 1.0;

/// Tracks pointer position and the drag that started on the canvas.
pub(crate) struct PointerState {
    pub(crate) position: DVec2,
    /// Button held since a press on the canvas. Presses that land on UI
    /// never start a drag.
    pub(crate) drag_button: Option<MouseButton>,
    pub(crate) is_dragging: bool,
    has_position: bool,
}

impl PointerState {
    pub(crate) fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            drag_button: None,
            is_dragging: false,
            has_position: false,
        }
    }

    /// Record the new cursor position and return the movement since the
    /// last one. The first sample yields zero.
    pub(crate) fn handle_position(&mut self, position: DVec2) -> DVec2 {
        let delta = if self.has_position {
            position - self.position
        } else {
            DVec2::ZERO
        };
        self.position = position;
        self.has_position = true;
        if self.drag_button.is_some() && delta.length_squared() > DRAG_THRESHOLD_SQ {
            self.is_dragging = true;
        }
        delta
    }

    pub(crate) fn press(&mut self, button: MouseButton) {
        self.drag_button = Some(button);
        self.is_dragging = false;
    }

    /// Returns whether the released press had turned into a drag.
    pub(crate) fn release(&mut self, button: MouseButton) -> bool {
        if self.drag_button != Some(button) {
            return false;
        }
        self.drag_button = None;
        std::mem::take(&mut self.is_dragging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_delta() {
        let mut state = PointerState::new();
        assert_eq!(state.handle_position(DVec2::new(50.0, 60.0)), DVec2::ZERO);
        assert_eq!(
            state.handle_position(DVec2::new(53.0, 58.0)),
            DVec2::new(3.0, -2.0)
        );
    }

    #[test]
    fn drag_needs_movement_while_pressed() {
        let mut state = PointerState::new();
        let _ = state.handle_position(DVec2::ZERO);
        state.press(MouseButton::Left);
        let _ = state.handle_position(DVec2::new(0.5, 0.0));
        assert!(!state.is_dragging);
        let _ = state.handle_position(DVec2::new(5.0, 0.0));
        assert!(state.is_dragging);
        assert!(!state.release(MouseButton::Right));
        assert!(state.release(MouseButton::Left));
        assert!(!state.is_dragging);
    }
}
