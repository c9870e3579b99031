//! Frame loop lifecycle
//!
//! `Uninitialized → Mounted → Running → TornDown`. Mounting is
//! all-or-nothing: without a drawable surface or with out-of-range settings
//! nothing is registered and the viewer goes straight to `TornDown`. Teardown runs exactly once, on entering
//! the terminal state.

use bevy::{
    core_pipeline::tonemapping::Tonemapping, prelude::*, window::PrimaryWindow,
};

use crate::config::{camera::*, colors::BACKGROUND};
use crate::settings::{srgb, ViewerSettings};
use crate::viewer::binder::PartBinding;
use crate::viewer::components::{ViewerCamera, ViewerEntity};
use crate::viewer::input::InputMapper;
use crate::viewer::resources::{
    FrameCount, HostEvents, ListenerRegistry, ModelLoad, MountOutcome, ShutdownRequest,
    SurfaceSize, ViewerLifecycle, ViewerPhase,
};
use crate::viewer::rig::OrbitRig;
use crate::viewer::status::StatusAnimator;

/// Build the rig and camera, register listeners and move to `Mounted`
pub fn mount_viewer(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    shutdown: Option<Res<ShutdownRequest>>,
    mut lifecycle: ResMut<ViewerLifecycle>,
    mut next_phase: ResMut<NextState<ViewerPhase>>,
) {
    if shutdown.is_some_and(|request| request.is_cancelled()) {
        return;
    }

    if let Err(err) = settings.validate() {
        error!("Viewer initialization aborted: {}", err);
        abort_mount(&mut lifecycle, &mut next_phase);
        return;
    }
    let Some(window) = windows.iter().next() else {
        error!("No drawable surface available; viewer initialization aborted");
        abort_mount(&mut lifecycle, &mut next_phase);
        return;
    };
    let surface = SurfaceSize {
        width: window.width(),
        height: window.height(),
    };

    // Camera must be valid before the first frame or any input
    let mut rig = OrbitRig::new(&settings.orbit);
    rig.update();

    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(srgb(BACKGROUND)),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: settings.orbit.fov_degrees.to_radians(),
            aspect_ratio: surface.aspect_ratio(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        rig.camera_transform(),
        ViewerCamera,
        ViewerEntity,
    ));

    commands.insert_resource(rig);
    commands.insert_resource(InputMapper::new(&settings.input));
    commands.insert_resource(StatusAnimator::new(&settings.animation));
    commands.insert_resource(surface);
    commands.insert_resource(ModelLoad::default());
    commands.insert_resource(FrameCount::default());
    commands.insert_resource(ListenerRegistry::all());

    lifecycle.mounted = true;
    lifecycle.outcome = Some(MountOutcome::Mounted);
    next_phase.set(ViewerPhase::Mounted);

    info!(
        "Viewer mounted on {}x{} surface",
        surface.width, surface.height
    );
}

fn abort_mount(lifecycle: &mut ViewerLifecycle, next_phase: &mut NextState<ViewerPhase>) {
    lifecycle.outcome = Some(MountOutcome::Aborted);
    next_phase.set(ViewerPhase::TornDown);
}

/// Schedule the first frame
pub fn enter_running(mut next_phase: ResMut<NextState<ViewerPhase>>) {
    next_phase.set(ViewerPhase::Running);
    info!("Frame loop running");
}

/// Check the host's cancellation token once per frame
pub fn watch_shutdown(
    shutdown: Option<Res<ShutdownRequest>>,
    mut next_phase: ResMut<NextState<ViewerPhase>>,
) {
    if shutdown.is_some_and(|request| request.is_cancelled()) {
        next_phase.set(ViewerPhase::TornDown);
    }
}

/// Release everything acquired at mount
pub fn tear_down_viewer(
    mut commands: Commands,
    owned: Query<Entity, With<ViewerEntity>>,
    listeners: Option<Res<ListenerRegistry>>,
    mut lifecycle: ResMut<ViewerLifecycle>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let detached = listeners.map_or(0, |registry| registry.registered_count());

    commands.remove_resource::<ListenerRegistry>();
    commands.remove_resource::<HostEvents>();
    commands.remove_resource::<PartBinding>();

    // Despawning drops the camera, lights and model meshes with their GPU data
    let mut released = 0;
    for entity in &owned {
        commands.entity(entity).despawn();
        released += 1;
    }

    lifecycle.mounted = false;
    app_exit.write(AppExit::Success);

    info!(
        "Viewer torn down: {} listeners detached, {} entities released",
        detached, released
    );
}

pub fn count_frames(mut count: ResMut<FrameCount>) {
    count.0 += 1;
}
