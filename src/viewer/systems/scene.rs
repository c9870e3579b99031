//! Scene setup and model loading
//!
//! Runs on entering `Mounted`: requests the glTF scene, lights the stage
//! and then watches the load until it completes or fails.

use bevy::{
    asset::LoadState,
    gltf::GltfAssetLabel,
    light::{AmbientLight, EnvironmentMapLight},
    prelude::*,
    scene::{SceneInstance, SceneSpawner},
};

use crate::config::scene::*;
use crate::settings::ViewerSettings;
use crate::viewer::components::{ModelRoot, ViewerCamera, ViewerEntity};
use crate::viewer::resources::{LoadStatus, ModelLoad, ModelLoaded};

/// Handle to the model scene. A host may insert one before mounting to
/// show an already loaded scene instead of fetching `assets.modelPath`.
#[derive(Resource)]
pub struct ModelAsset(pub Handle<Scene>);

/// Start the asynchronous model fetch; the scene attaches when it arrives
pub fn begin_model_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    preloaded: Option<Res<ModelAsset>>,
) {
    let scene = match preloaded {
        Some(model) => {
            info!("Showing host-supplied model scene");
            model.0.clone()
        }
        None => {
            let path = settings.assets.model_path.clone();
            let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.clone()));
            commands.insert_resource(ModelAsset(scene.clone()));
            info!("Loading model from {}", path);
            scene
        }
    };

    commands.spawn((
        SceneRoot(scene),
        Transform::default(),
        ModelRoot,
        ViewerEntity,
    ));
}

/// Key light plus ambient and image-based lighting on the camera
pub fn light_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    cameras: Query<Entity, With<ViewerCamera>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(KEY_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
        ViewerEntity,
    ));

    for camera in &cameras {
        let mut entity = commands.entity(camera);
        entity.insert(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

        // Lighting only; the clear color stays the background
        if let Some(environment) = &settings.assets.environment {
            entity.insert(EnvironmentMapLight {
                diffuse_map: asset_server.load(environment.diffuse_path.clone()),
                specular_map: asset_server.load(environment.specular_path.clone()),
                intensity: environment.intensity,
                rotation: Quat::IDENTITY,
                affects_lightmapped_mesh_diffuse: true,
            });
        }
    }
}

/// Poll the model load; fire [`ModelLoaded`] once the instance is spawned
pub fn watch_model_load(
    mut load: ResMut<ModelLoad>,
    model: Option<Res<ModelAsset>>,
    asset_server: Res<AssetServer>,
    scene_spawner: Res<SceneSpawner>,
    roots: Query<(Entity, &SceneInstance), With<ModelRoot>>,
    mut commands: Commands,
) {
    if load.status != LoadStatus::Pending {
        return;
    }
    let Some(model) = model else { return };

    if let LoadState::Failed(err) = asset_server.load_state(model.0.id()) {
        warn!("Model failed to load, continuing with an empty scene: {}", err);
        load.status = LoadStatus::Failed;
        return;
    }

    for (root, instance) in &roots {
        if scene_spawner.instance_is_ready(**instance) {
            load.status = LoadStatus::Loaded;
            commands.trigger(ModelLoaded { root });
            info!("Model scene ready");
            return;
        }
    }
}
