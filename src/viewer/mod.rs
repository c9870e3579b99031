//! Viewer runtime
//!
//! Pure state (`rig`, `input`, `binder`, `status`) plus the Bevy layer
//! that drives it (`components`, `resources`, `systems`, `plugins`, `app`).

pub mod app;
pub mod binder;
pub mod components;
pub mod input;
pub mod plugins;
pub mod resources;
pub mod rig;
pub mod status;
pub mod systems;

// Re-export commonly used items
pub use app::{create_app, create_viewer};
pub use plugins::{
    ModelScenePlugin, ViewerCorePlugin, ViewerPlugin, ViewerSystems, WindowInputPlugin,
};
