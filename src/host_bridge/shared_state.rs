//! Shared state between the host and the viewer thread
//!
//! The host keeps a [`ViewerHandle`]; the viewer owns the matching
//! [`HostLink`]. Events travel over an unbounded channel and are drained
//! once per frame. Teardown drops the receiver, after which `send` reports
//! [`ViewerError::Detached`].

use crossbeam_channel::{Receiver, Sender};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use super::events::ViewerEvent;
use crate::error::{ViewerError, ViewerResult};

// =============================================================================
// Cancellation
// =============================================================================

/// Thread-safe teardown request, checked by the viewer every frame
#[derive(Clone, Default, Debug)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// =============================================================================
// Host side
// =============================================================================

/// Host-facing handle to a running viewer
#[derive(Clone, Debug)]
pub struct ViewerHandle {
    events: Sender<ViewerEvent>,
    shutdown: ShutdownToken,
}

impl ViewerHandle {
    /// Forward one raw event. Returns whether the host should suppress its
    /// default handling of it.
    pub fn send(&self, event: ViewerEvent) -> ViewerResult<bool> {
        self.events.send(event).map_err(|_| ViewerError::Detached)?;
        Ok(event.suppresses_default())
    }

    /// Forward one JSON-encoded event
    pub fn send_json(&self, json: &str) -> ViewerResult<bool> {
        self.send(ViewerEvent::from_json(json)?)
    }

    /// Request teardown; takes effect on the viewer's next frame
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

// =============================================================================
// Viewer side
// =============================================================================

/// Viewer end of the bridge
#[derive(Debug)]
pub struct HostLink {
    pub events: Receiver<ViewerEvent>,
    pub shutdown: ShutdownToken,
}

/// Create a connected handle/link pair
pub fn host_channel() -> (ViewerHandle, HostLink) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let shutdown = ShutdownToken::default();
    (
        ViewerHandle {
            events: sender,
            shutdown: shutdown.clone(),
        },
        HostLink {
            events: receiver,
            shutdown,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_the_link_in_order() {
        let (handle, link) = host_channel();
        handle.send(ViewerEvent::PointerDown { x: 1.0, y: 2.0 }).unwrap();
        handle.send_json(r#"{"type":"pointerUp"}"#).unwrap();
        let received: Vec<_> = link.events.try_iter().collect();
        assert_eq!(
            received,
            vec![ViewerEvent::PointerDown { x: 1.0, y: 2.0 }, ViewerEvent::PointerUp]
        );
    }

    #[test]
    fn wheel_reports_suppression() {
        let (handle, _link) = host_channel();
        assert!(handle.send(ViewerEvent::Wheel { delta_y: 10.0 }).unwrap());
        assert!(!handle.send(ViewerEvent::PointerLeave).unwrap());
    }

    #[test]
    fn dropped_link_detaches_handle() {
        let (handle, link) = host_channel();
        drop(link);
        assert!(matches!(
            handle.send(ViewerEvent::PointerUp),
            Err(ViewerError::Detached)
        ));
    }

    #[test]
    fn shutdown_is_shared() {
        let (handle, link) = host_channel();
        assert!(!link.shutdown.is_cancelled());
        handle.clone().shutdown();
        assert!(link.shutdown.is_cancelled());
    }
}
