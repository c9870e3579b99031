//! Bevy component definitions
//!
//! Markers used to find viewer-owned entities in the ECS world.

use bevy::prelude::*;

/// Camera driven by the orbit rig
#[derive(Component)]
pub struct ViewerCamera;

/// Root of the loaded equipment scene
#[derive(Component)]
pub struct ModelRoot;

/// Anything spawned at mount time; despawned on teardown
#[derive(Component)]
pub struct ViewerEntity;
