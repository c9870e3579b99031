//! Bevy application setup
//!
//! Builds the windowed viewer app and pairs it with the host handle.

use bevy::prelude::*;

use crate::config::scene::WINDOW_TITLE;
use crate::error::ViewerResult;
use crate::host_bridge::{host_channel, HostLink, ViewerHandle};
use crate::settings::ViewerSettings;
use crate::viewer::plugins::ViewerPlugin;
use crate::viewer::resources::insert_host_link;

/// Create and configure the Bevy application.
///
/// Settings are validated here; out-of-range limits never reach the rig.
pub fn create_app(link: HostLink, settings: ViewerSettings) -> ViewerResult<App> {
    settings.validate()?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            ..default()
        }),
        // Closing goes through viewer teardown, which exits the app
        close_when_requested: false,
        ..default()
    }));

    insert_host_link(&mut app, link);
    app.add_plugins(ViewerPlugin { settings });

    info!("Viewer app configured");
    Ok(app)
}

/// Build a viewer and the handle a host uses to drive it.
///
/// `App::run` must be called on the thread that owns the window; the
/// handle may be moved to any thread.
pub fn create_viewer(settings: ViewerSettings) -> ViewerResult<(ViewerHandle, App)> {
    let (handle, link) = host_channel();
    let app = create_app(link, settings)?;
    Ok((handle, app))
}
