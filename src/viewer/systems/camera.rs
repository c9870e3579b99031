//! Camera rig system
//!
//! Advances the orbit smoothing once per frame and writes the resulting
//! look-at transform to the viewer camera.

use bevy::prelude::*;

use crate::viewer::components::ViewerCamera;
use crate::viewer::rig::OrbitRig;

pub fn advance_camera_rig(
    mut rig: ResMut<OrbitRig>,
    mut cameras: Query<&mut Transform, With<ViewerCamera>>,
) {
    rig.update();
    let camera_transform = rig.camera_transform();
    for mut transform in cameras.iter_mut() {
        *transform = camera_transform;
    }
}
