//! Bevy systems
//!
//! This module contains all the systems that operate on viewer entities
//! and resources in the Bevy ECS.

pub mod animation;
pub mod binding;
pub mod camera;
pub mod input;
pub mod lifecycle;
pub mod scene;

pub use animation::animate_status_parts;
pub use binding::bind_model_parts;
pub use camera::advance_camera_rig;
pub use input::{
    dispatch_viewer_events, pump_host_events, request_teardown_on_close, translate_window_input,
};
pub use lifecycle::{count_frames, enter_running, mount_viewer, tear_down_viewer, watch_shutdown};
pub use scene::{begin_model_load, light_scene, watch_model_load};
