//! Notifications the coordinator emits for the surrounding UI.

use serde::Serialize;

/// A state change other components may want to react to.
///
/// Serialized with an internal `type` tag so the web façade can forward
/// the payload as a DOM event detail unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CameraEvent {
    /// The active animation changed.
    #[serde(rename_all = "camelCase")]
    AnimationChanged {
        /// New animation id, `"none"` when stopped.
        animation: String,
        /// Whether the camera keeps its current pose instead of snapping.
        keep_current_position: bool,
    },
    /// Free mouse control was switched on or off.
    MouseControlsToggled {
        /// New state.
        enabled: bool,
    },
    /// The "mouse controls activated" toast should appear.
    FeedbackShown,
    /// The toast timed out.
    FeedbackHidden,
}

impl CameraEvent {
    /// DOM event name the web façade dispatches this under.
    #[must_use]
    pub fn dom_name(&self) -> &'static str {
        match self {
            Self::AnimationChanged { .. } => "animationChanged",
            Self::MouseControlsToggled { .. } => "mouseControlsToggled",
            Self::FeedbackShown | Self::FeedbackHidden => "mouseControlFeedback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_changed_payload_uses_camel_case() {
        let event = CameraEvent::AnimationChanged {
            animation: "none".into(),
            keep_current_position: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "animationChanged");
        assert_eq!(json["animation"], "none");
        assert_eq!(json["keepCurrentPosition"], true);
        assert_eq!(event.dom_name(), "animationChanged");
    }

    #[test]
    fn feedback_events_share_dom_name() {
        assert_eq!(CameraEvent::FeedbackShown.dom_name(), "mouseControlFeedback");
        assert_eq!(CameraEvent::FeedbackHidden.dom_name(), "mouseControlFeedback");
        let json = serde_json::to_value(CameraEvent::FeedbackHidden).unwrap();
        assert_eq!(json["type"], "feedbackHidden");
    }
}
