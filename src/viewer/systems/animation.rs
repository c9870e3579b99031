//! Animation systems
//!
//! Applies the status animator's effects for this frame. Each effect is
//! independent: a despawned node, a node without a standard material or a
//! material that is not loaded skips only that effect.

use bevy::{prelude::*, time::Time};

use crate::viewer::binder::PartBinding;
use crate::viewer::status::{PartEffect, SpinAxis, StatusAnimator, StatusSnapshot};

pub fn animate_status_parts(
    time: Res<Time>,
    animator: Res<StatusAnimator>,
    snapshot: Res<StatusSnapshot>,
    binding: Option<Res<PartBinding>>,
    mut transforms: Query<&mut Transform>,
    surfaces: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    // Nothing to animate until the model is bound
    let Some(binding) = binding else { return };

    let clock = animator.clock(time.elapsed_secs());
    for effect in animator.tick(clock, &snapshot, &binding) {
        match effect {
            PartEffect::Spin {
                entity,
                axis,
                radians,
            } => {
                let Ok(mut transform) = transforms.get_mut(entity) else {
                    continue;
                };
                match axis {
                    SpinAxis::X => transform.rotate_local_x(radians),
                    SpinAxis::Y => transform.rotate_local_y(radians),
                }
            }
            PartEffect::Tint { entity, color } => {
                let (Ok(surface), Some(materials)) =
                    (surfaces.get(entity), materials.as_deref_mut())
                else {
                    continue;
                };
                if let Some(material) = materials.get_mut(&surface.0) {
                    material.base_color = color;
                }
            }
        }
    }
}
