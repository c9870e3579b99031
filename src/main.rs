// Prevents an additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rooftop_viewer_lib::{error::ViewerResult, settings::ViewerSettings};

/// Usage: `rooftop-viewer [settings.json]`
fn main() -> ViewerResult<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => ViewerSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => ViewerSettings::default(),
    };
    rooftop_viewer_lib::run(settings)
}
