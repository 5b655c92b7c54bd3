/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) together
/// with a flag saying whether the pointer is over a UI element, and come out
/// as [`CameraCommand`](crate::CameraCommand) values.
///
/// # Example
///
/// ```ignore
/// let commands = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     pointer_over_panel,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in CSS pixels.
        x: f64,
        /// Vertical position in CSS pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f64,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}
