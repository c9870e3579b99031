//! Bevy plugins
//!
//! [`ViewerCorePlugin`] holds the GPU-free runtime: lifecycle, input, rig,
//! binding and status animation. [`ViewerPlugin`] adds what a windowed host
//! needs on top: [`WindowInputPlugin`], [`ModelScenePlugin`] and lighting.

use bevy::{
    prelude::*,
    window::{WindowCloseRequested, WindowEvent},
};

use crate::host_bridge::ViewerEvent;
use crate::settings::ViewerSettings;
use crate::viewer::resources::{ListenerRegistry, ViewerLifecycle, ViewerPhase};
use crate::viewer::status::StatusSnapshot;
use crate::viewer::systems::*;

/// Per-frame ordering while `Running`
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSystems {
    Input,
    Camera,
    Animation,
    Bookkeeping,
}

#[derive(Default)]
pub struct ViewerCorePlugin {
    pub settings: ViewerSettings,
}

impl Plugin for ViewerCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewerPhase>();
        app.add_message::<ViewerEvent>();

        app.insert_resource(self.settings.clone());
        app.init_resource::<ViewerLifecycle>();
        // Hosts may insert their own snapshot before adding the plugin
        app.init_resource::<StatusSnapshot>();

        app.configure_sets(
            Update,
            (
                ViewerSystems::Input,
                ViewerSystems::Camera,
                ViewerSystems::Animation,
                ViewerSystems::Bookkeeping,
            )
                .chain()
                .run_if(in_state(ViewerPhase::Running)),
        );

        app.add_systems(PreUpdate, pump_host_events);
        app.add_systems(
            PreUpdate,
            watch_shutdown.run_if(not(in_state(ViewerPhase::TornDown))),
        );
        app.add_systems(
            Update,
            mount_viewer.run_if(in_state(ViewerPhase::Uninitialized)),
        );
        app.add_systems(OnEnter(ViewerPhase::Mounted), enter_running);
        app.add_systems(
            Update,
            (
                dispatch_viewer_events
                    .in_set(ViewerSystems::Input)
                    .run_if(resource_exists::<ListenerRegistry>),
                advance_camera_rig.in_set(ViewerSystems::Camera),
                animate_status_parts.in_set(ViewerSystems::Animation),
                count_frames.in_set(ViewerSystems::Bookkeeping),
            ),
        );
        app.add_systems(OnEnter(ViewerPhase::TornDown), tear_down_viewer);
        app.add_observer(bind_model_parts);
    }
}

/// Model fetch and load watching. Needs `AssetPlugin` and `ScenePlugin`.
pub struct ModelScenePlugin;

impl Plugin for ModelScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewerPhase::Mounted), begin_model_load);
        app.add_systems(
            Update,
            watch_model_load
                .before(ViewerSystems::Input)
                .run_if(in_state(ViewerPhase::Running)),
        );
    }
}

/// Window messages as viewer events, plus close-to-teardown
pub struct WindowInputPlugin;

impl Plugin for WindowInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<WindowEvent>();
        app.add_message::<WindowCloseRequested>();
        app.add_systems(
            PreUpdate,
            (translate_window_input, request_teardown_on_close).before(pump_host_events),
        );
    }
}

#[derive(Default)]
pub struct ViewerPlugin {
    pub settings: ViewerSettings,
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ViewerCorePlugin {
                settings: self.settings.clone(),
            },
            ModelScenePlugin,
            WindowInputPlugin,
        ));
        app.add_systems(OnEnter(ViewerPhase::Mounted), light_scene);
    }
}
