//! Raw host events
//!
//! The host forwards pointer, wheel and resize events as [`ViewerEvent`]s,
//! either as Rust values or as JSON such as
//! `{"type":"pointerMove","x":120.0,"y":48.5}`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ViewerResult;

#[derive(Message, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewerEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerLeave,
    /// Vertical wheel delta in pixels, positive scrolls down (zooms out)
    #[serde(rename_all = "camelCase")]
    Wheel { delta_y: f32 },
    Resize { width: u32, height: u32 },
}

/// Which listener receives an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    Wheel,
    Resize,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 6] = [
        ListenerKind::PointerDown,
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::PointerLeave,
        ListenerKind::Wheel,
        ListenerKind::Resize,
    ];
}

impl ViewerEvent {
    pub fn from_json(json: &str) -> ViewerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn listener(&self) -> ListenerKind {
        match self {
            ViewerEvent::PointerDown { .. } => ListenerKind::PointerDown,
            ViewerEvent::PointerMove { .. } => ListenerKind::PointerMove,
            ViewerEvent::PointerUp => ListenerKind::PointerUp,
            ViewerEvent::PointerLeave => ListenerKind::PointerLeave,
            ViewerEvent::Wheel { .. } => ListenerKind::Wheel,
            ViewerEvent::Resize { .. } => ListenerKind::Resize,
        }
    }

    /// True when the host must cancel its own default handling (page scroll)
    pub fn suppresses_default(&self) -> bool {
        matches!(self, ViewerEvent::Wheel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewerError;

    #[test]
    fn decodes_tagged_json() {
        assert_eq!(
            ViewerEvent::from_json(r#"{"type":"pointerDown","x":100,"y":100}"#).unwrap(),
            ViewerEvent::PointerDown { x: 100.0, y: 100.0 }
        );
        assert_eq!(
            ViewerEvent::from_json(r#"{"type":"wheel","deltaY":-53.0}"#).unwrap(),
            ViewerEvent::Wheel { delta_y: -53.0 }
        );
        assert_eq!(
            ViewerEvent::from_json(r#"{"type":"pointerLeave"}"#).unwrap(),
            ViewerEvent::PointerLeave
        );
        assert_eq!(
            ViewerEvent::from_json(r#"{"type":"resize","width":800,"height":500}"#).unwrap(),
            ViewerEvent::Resize {
                width: 800,
                height: 500
            }
        );
    }

    #[test]
    fn unknown_event_type_is_malformed() {
        let err = ViewerEvent::from_json(r#"{"type":"keyDown","key":"a"}"#).unwrap_err();
        assert!(matches!(err, ViewerError::MalformedPayload(_)));
    }

    #[test]
    fn only_wheel_suppresses_default() {
        assert!(ViewerEvent::Wheel { delta_y: 1.0 }.suppresses_default());
        assert!(!ViewerEvent::PointerUp.suppresses_default());
        assert!(!ViewerEvent::PointerMove { x: 0.0, y: 0.0 }.suppresses_default());
    }
}
