//! Input systems
//!
//! Host events arrive through the bridge channel or, in the windowed host,
//! from Bevy's window messages. Both become [`ViewerEvent`]s, which are
//! dispatched to the input mapper only while their listener is registered.

use bevy::{
    input::{mouse::MouseScrollUnit, ButtonState},
    prelude::*,
    window::{WindowCloseRequested, WindowEvent},
};

use crate::config::input::LINE_DELTA_PIXELS;
use crate::host_bridge::ViewerEvent;
use crate::viewer::components::ViewerCamera;
use crate::viewer::input::InputMapper;
use crate::viewer::resources::{HostEvents, ListenerRegistry, ShutdownRequest, SurfaceSize};
use crate::viewer::rig::OrbitRig;

/// Drain events the host pushed since the last frame
pub fn pump_host_events(host: Option<Res<HostEvents>>, mut events: MessageWriter<ViewerEvent>) {
    let Some(host) = host else { return };
    for event in host.try_iter() {
        events.write(event);
    }
}

/// Feed registered events to the input mapper and the surface
pub fn dispatch_viewer_events(
    mut events: MessageReader<ViewerEvent>,
    listeners: Res<ListenerRegistry>,
    mut mapper: ResMut<InputMapper>,
    mut rig: ResMut<OrbitRig>,
    mut surface: ResMut<SurfaceSize>,
    mut projections: Query<&mut Projection, With<ViewerCamera>>,
) {
    for event in events.read() {
        if !listeners.is_registered(event.listener()) {
            continue;
        }
        match *event {
            ViewerEvent::PointerDown { x, y } => {
                mapper.pointer_down(x, y);
            }
            ViewerEvent::PointerMove { x, y } => {
                mapper.pointer_move(&mut rig, x, y);
            }
            ViewerEvent::PointerUp | ViewerEvent::PointerLeave => {
                mapper.pointer_up();
            }
            ViewerEvent::Wheel { delta_y } => {
                mapper.wheel(&mut rig, delta_y);
            }
            ViewerEvent::Resize { width, height } => {
                if width == 0 || height == 0 {
                    continue;
                }
                *surface = SurfaceSize {
                    width: width as f32,
                    height: height as f32,
                };
                for mut projection in &mut projections {
                    if let Projection::Perspective(perspective) = projection.as_mut() {
                        perspective.aspect_ratio = surface.aspect_ratio();
                    }
                }
                debug!("Surface resized to {}x{}", width, height);
            }
        }
    }
}

/// Windowed host: turn window messages into viewer events.
///
/// Reads the combined window event stream so a press, a move and a release
/// within one frame keep their original order.
pub fn translate_window_input(
    mut window_events: MessageReader<WindowEvent>,
    mut cursor: Local<Vec2>,
    mut events: MessageWriter<ViewerEvent>,
) {
    let mut resized = None;
    for window_event in window_events.read() {
        match window_event {
            WindowEvent::CursorMoved(moved) => {
                *cursor = moved.position;
                events.write(ViewerEvent::PointerMove {
                    x: moved.position.x,
                    y: moved.position.y,
                });
            }
            WindowEvent::MouseButtonInput(input) if input.button == MouseButton::Left => {
                events.write(match input.state {
                    ButtonState::Pressed => ViewerEvent::PointerDown {
                        x: cursor.x,
                        y: cursor.y,
                    },
                    ButtonState::Released => ViewerEvent::PointerUp,
                });
            }
            WindowEvent::CursorLeft(_) => {
                events.write(ViewerEvent::PointerLeave);
            }
            WindowEvent::MouseWheel(wheel) => {
                events.write(ViewerEvent::Wheel {
                    delta_y: wheel_delta_pixels(wheel.unit, wheel.y),
                });
            }
            WindowEvent::WindowResized(resize) => resized = Some((resize.width, resize.height)),
            _ => {}
        }
    }

    // Only the final size of the frame matters
    if let Some((width, height)) = resized {
        events.write(ViewerEvent::Resize {
            width: width.round() as u32,
            height: height.round() as u32,
        });
    }
}

/// Host wheel delta in pixels, positive when scrolling down (zooming out).
/// Window wheel `y` is positive when scrolling up.
pub fn wheel_delta_pixels(unit: MouseScrollUnit, y: f32) -> f32 {
    let pixels = match unit {
        MouseScrollUnit::Line => y * LINE_DELTA_PIXELS,
        MouseScrollUnit::Pixel => y,
    };
    -pixels
}

/// Windowed host: closing the window requests an orderly teardown
pub fn request_teardown_on_close(
    mut close_requests: MessageReader<WindowCloseRequested>,
    shutdown: Option<Res<ShutdownRequest>>,
) {
    if close_requests.read().count() == 0 {
        return;
    }
    if let Some(request) = shutdown {
        info!("Window close requested");
        request.cancel();
    }
}
