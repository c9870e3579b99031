//! Model loading through the asset server and scene spawner
//!
//! Runs the real load path headless: `ScenePlugin` spawns the scene and the
//! viewer watches for readiness or failure on its own.

use std::time::Duration;

use bevy::{
    gltf::GltfMaterialName, prelude::*, scene::ScenePlugin, state::app::StatesPlugin,
    window::PrimaryWindow,
};

use rooftop_viewer_lib::host_bridge::{host_channel, ViewerHandle};
use rooftop_viewer_lib::settings::{AssetSettings, ViewerSettings};
use rooftop_viewer_lib::viewer::binder::{PartBinding, PartKey};
use rooftop_viewer_lib::viewer::resources::{
    insert_host_link, FrameCount, LoadStatus, ModelLoad, ModelLoaded, ViewerPhase,
};
use rooftop_viewer_lib::viewer::systems::scene::ModelAsset;
use rooftop_viewer_lib::viewer::{ModelScenePlugin, ViewerCorePlugin};

#[derive(Resource, Default)]
struct LoadedCount(u32);

fn loading_app(model_path: &str) -> (App, ViewerHandle) {
    let settings = ViewerSettings {
        assets: AssetSettings {
            model_path: model_path.to_string(),
            environment: None,
        },
        ..default()
    };

    let (handle, link) = host_channel();
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<StandardMaterial>();
    app.register_type::<Name>();
    app.register_type::<GltfMaterialName>();
    insert_host_link(&mut app, link);
    app.add_plugins((ViewerCorePlugin { settings }, ModelScenePlugin));

    app.init_resource::<LoadedCount>();
    app.add_observer(|_loaded: On<ModelLoaded>, mut count: ResMut<LoadedCount>| {
        count.0 += 1;
    });

    app.world_mut().spawn((Window::default(), PrimaryWindow));
    (app, handle)
}

fn phase(app: &App) -> ViewerPhase {
    *app.world().resource::<State<ViewerPhase>>().get()
}

fn load_status(app: &App) -> Option<LoadStatus> {
    app.world().get_resource::<ModelLoad>().map(|load| load.status)
}

/// Step frames until `done` holds; asset IO finishes on other threads
fn update_until(app: &mut App, done: impl Fn(&App) -> bool) {
    for _ in 0..400 {
        app.update();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!(
        "condition not reached; phase {:?}, load {:?}",
        phase(app),
        load_status(app)
    );
}

#[test]
fn missing_model_fails_but_viewer_keeps_running() {
    let (mut app, _handle) = loading_app("models/not_there.glb");
    update_until(&mut app, |app| load_status(app) == Some(LoadStatus::Failed));

    let frames = app.world().resource::<FrameCount>().0;
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(phase(&app), ViewerPhase::Running);
    assert_eq!(load_status(&app), Some(LoadStatus::Failed));
    assert_eq!(app.world().resource::<FrameCount>().0, frames + 10);
    assert!(app.world().get_resource::<PartBinding>().is_none());
    assert_eq!(app.world().resource::<LoadedCount>().0, 0);
}

#[test]
fn spawned_scene_is_bound_exactly_once() {
    let (mut app, _handle) = loading_app("models/unused.glb");

    let mut scene_world = World::new();
    let fan = scene_world
        .spawn((
            Name::new("Fan_Housing"),
            GltfMaterialName("Black_Ventilation".to_string()),
        ))
        .id();
    scene_world.spawn(Name::new("Vent_Compress_1"));
    scene_world.spawn((
        Name::new("Cabinet"),
        GltfMaterialName("Paint_Grey".to_string()),
    ));
    let scene = app
        .world_mut()
        .resource_mut::<Assets<Scene>>()
        .add(Scene::new(scene_world));
    app.insert_resource(ModelAsset(scene));

    update_until(&mut app, |app| load_status(app) == Some(LoadStatus::Loaded));
    for _ in 0..10 {
        app.update();
    }

    assert_eq!(app.world().resource::<LoadedCount>().0, 1);
    let binding = app.world().resource::<PartBinding>();
    assert_eq!(binding.bound_count(), 2);

    // Bound entities are the spawned copies, not the template's
    let bound_fan = binding.get(PartKey::Fan).expect("fan bound");
    assert_ne!(bound_fan, fan);
    assert_eq!(
        app.world()
            .get::<GltfMaterialName>(bound_fan)
            .map(|name| name.0.as_str()),
        Some("Black_Ventilation")
    );
    assert!(binding.get(PartKey::CompressorFan1).is_some());
    assert_eq!(binding.get(PartKey::GasTube), None);
    assert_eq!(phase(&app), ViewerPhase::Running);
}
