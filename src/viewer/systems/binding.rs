//! Part binding on load completion
//!
//! [`bind_model_parts`] observes [`ModelLoaded`] and runs the binder once
//! over the spawned hierarchy. Tinted parts get their own material copy so
//! recoloring one part never bleeds into another that shared the glTF
//! material. The gas tube's authored color is kept for its healthy state.

use bevy::{gltf::GltfMaterialName, prelude::*};

use crate::viewer::binder::{PartBinding, PartKey, SceneNode};
use crate::viewer::resources::{ModelLoaded, ViewerLifecycle};
use crate::viewer::status::{StatusAnimator, StatusSnapshot};

pub fn bind_model_parts(
    loaded: On<ModelLoaded>,
    lifecycle: Res<ViewerLifecycle>,
    existing: Option<Res<PartBinding>>,
    snapshot: Res<StatusSnapshot>,
    children: Query<&Children>,
    nodes: Query<(Option<&Name>, Option<&GltfMaterialName>)>,
    surfaces: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
    animator: Option<ResMut<StatusAnimator>>,
    mut commands: Commands,
) {
    let root = loaded.event().root;

    if !lifecycle.mounted {
        debug!("Model load completed after teardown; ignoring");
        return;
    }
    if existing.is_some() {
        return;
    }

    let visited = std::iter::once(root)
        .chain(children.iter_descendants(root))
        .filter_map(|entity| {
            let (name, material) = nodes.get(entity).ok()?;
            Some(SceneNode {
                entity,
                material_name: material.map(|material| material.0.as_str()),
                node_name: name.map(|name| name.as_str()),
            })
        });
    let binding = PartBinding::bind(visited);

    let mut authored_tube = None;
    if let Some(materials) = materials.as_deref_mut() {
        for (key, entity) in binding.iter() {
            if snapshot.for_part(key).is_none() {
                continue;
            }
            let Ok(surface) = surfaces.get(entity) else {
                continue;
            };
            let Some(material) = materials.get(&surface.0).cloned() else {
                continue;
            };
            if key == PartKey::GasTube {
                authored_tube = Some(material.base_color);
            }
            commands
                .entity(entity)
                .insert(MeshMaterial3d(materials.add(material)));
        }
    }

    if let Some(mut animator) = animator {
        animator.gas_tube_authored = authored_tube;
    }

    info!(
        "Bound {}/{} parts from loaded model",
        binding.bound_count(),
        PartKey::COUNT
    );
    for key in binding.missing() {
        debug!("Part '{}' not present in model", key.as_str());
    }

    commands.insert_resource(binding);
}
