//! Rooftop Unit Viewer
//!
//! Interactive 3D view of a rooftop air-conditioning unit. The user orbits
//! and zooms the camera; monitored parts pulse and spin to show their health
//! status (`good` / `warning` / `critical`).
//!
//! Architecture:
//! - The host mounts a drawable surface and forwards raw pointer, wheel and
//!   resize events through a [`host_bridge::ViewerHandle`]
//! - Input moves orbit *targets*; the rig smooths toward them once per frame
//! - The glTF model loads asynchronously; on completion its nodes are bound
//!   to semantic parts by material name
//! - Each frame the status animator turns a `StatusSnapshot` into spins and tints
//!
//! # Module Structure
//!
//! - `config`: Configuration constants
//! - `settings`: Serializable view of the constants
//! - `error`: Host-facing errors
//! - `host_bridge`: Bridge layer between the host and the viewer
//!   - `events`: Raw host events
//!   - `shared_state`: Channel and cancellation token
//! - `viewer`: Bevy integration
//!   - `rig`, `input`, `binder`, `status`: Pure viewer state and logic
//!   - `components`, `resources`: ECS data
//!   - `systems`: Frame systems
//!   - `plugins`: Core and windowed plugins
//!   - `app`: Application setup

pub mod config;
pub mod error;
pub mod host_bridge;
pub mod settings;
pub mod viewer;

use error::ViewerResult;
use settings::ViewerSettings;

/// Run the standalone viewer with the given settings until its window closes
pub fn run(settings: ViewerSettings) -> ViewerResult<()> {
    // The handle stays alive so the event channel stays connected
    let (_handle, mut app) = viewer::create_viewer(settings)?;
    app.run();
    Ok(())
}
