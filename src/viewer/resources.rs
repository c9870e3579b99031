//! Bevy resource definitions
//!
//! Lifecycle, host link and bookkeeping resources. The rig, input mapper,
//! part binding and animator live in their own modules.

use bevy::prelude::*;
use crossbeam_channel::Receiver;
use std::collections::HashSet;

use crate::host_bridge::{HostLink, ListenerKind, ShutdownToken, ViewerEvent};

// =============================================================================
// Lifecycle
// =============================================================================

/// Frame loop orchestrator states
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewerPhase {
    #[default]
    Uninitialized,
    Mounted,
    Running,
    /// Terminal
    TornDown,
}

/// How mounting ended, if it has been attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// No drawable surface; nothing was registered
    Aborted,
}

/// Mount bookkeeping shared by systems and load callbacks
#[derive(Resource, Debug, Default)]
pub struct ViewerLifecycle {
    /// Cleared on teardown; late callbacks check it before touching anything
    pub mounted: bool,
    pub outcome: Option<MountOutcome>,
}

// =============================================================================
// Host Link
// =============================================================================

/// Receives host events for the frame loop
#[derive(Resource, Deref)]
pub struct HostEvents(pub Receiver<ViewerEvent>);

/// Teardown requests from the host
#[derive(Resource, Deref)]
pub struct ShutdownRequest(pub ShutdownToken);

/// Split a host link into its two resources
pub fn insert_host_link(app: &mut App, link: HostLink) {
    app.insert_resource(HostEvents(link.events));
    app.insert_resource(ShutdownRequest(link.shutdown));
}

/// Listeners registered at mount time; removed as a whole on teardown
#[derive(Resource, Debug, Default)]
pub struct ListenerRegistry {
    registered: HashSet<ListenerKind>,
}

impl ListenerRegistry {
    pub fn all() -> Self {
        Self {
            registered: ListenerKind::ALL.into_iter().collect(),
        }
    }

    pub fn is_registered(&self, kind: ListenerKind) -> bool {
        self.registered.contains(&kind)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }
}

// =============================================================================
// Surface & Model
// =============================================================================

/// Size of the drawable surface in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Progress of the one asynchronous asset load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    /// Permanent for this session; no retry
    Failed,
}

#[derive(Resource, Debug, Default)]
pub struct ModelLoad {
    pub status: LoadStatus,
}

/// Fired once when the model's scene instance is ready to bind
#[derive(Event, Debug, Clone, Copy)]
pub struct ModelLoaded {
    pub root: Entity,
}

// =============================================================================
// Frame Management
// =============================================================================

/// Counter for frames run in the `Running` phase
#[derive(Resource, Default)]
pub struct FrameCount(pub u32);
