//! Pointer and wheel input mapping
//!
//! Translates raw pointer drags and wheel deltas into orbit targets. The
//! mapper never touches the visible camera angles directly.

use bevy::prelude::*;

use crate::settings::InputSettings;
use crate::viewer::rig::OrbitRig;

/// An in-progress pointer drag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Maps pointer and wheel events onto an [`OrbitRig`]
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputMapper {
    pub session: DragSession,
    pub drag_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl InputMapper {
    pub fn new(settings: &InputSettings) -> Self {
        Self {
            session: DragSession::default(),
            drag_sensitivity: settings.drag_sensitivity,
            zoom_sensitivity: settings.zoom_sensitivity,
        }
    }

    /// Start a drag at `(x, y)`. Pressing again re-captures the reference point.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.session = DragSession {
            active: true,
            last_x: x,
            last_y: y,
        };
    }

    pub fn pointer_move(&mut self, rig: &mut OrbitRig, x: f32, y: f32) {
        if !self.session.active {
            return;
        }
        let delta_x = x - self.session.last_x;
        let delta_y = y - self.session.last_y;
        rig.nudge_yaw(-delta_x * self.drag_sensitivity);
        rig.nudge_pitch(delta_y * self.drag_sensitivity);
        self.session.last_x = x;
        self.session.last_y = y;
    }

    /// End the drag. Also used for pointer-leave.
    pub fn pointer_up(&mut self) {
        self.session.active = false;
    }

    /// Zoom by a pixel wheel delta. Whether the host suppresses its own
    /// scrolling is decided by [`ViewerEvent::suppresses_default`].
    ///
    /// [`ViewerEvent::suppresses_default`]: crate::host_bridge::ViewerEvent::suppresses_default
    pub fn wheel(&mut self, rig: &mut OrbitRig, delta_y: f32) {
        rig.zoom(delta_y * self.zoom_sensitivity);
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(&InputSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rig_and_mapper() -> (OrbitRig, InputMapper) {
        (OrbitRig::default(), InputMapper::default())
    }

    #[test]
    fn drag_moves_targets_not_angles() {
        let (mut rig, mut mapper) = rig_and_mapper();
        let (yaw, pitch) = (rig.yaw, rig.pitch);
        let (target_yaw, target_pitch) = (rig.target_yaw, rig.target_pitch);

        mapper.pointer_down(100.0, 100.0);
        mapper.pointer_move(&mut rig, 150.0, 80.0);

        assert_relative_eq!(rig.target_yaw, target_yaw - 0.5, epsilon = 1e-5);
        assert_relative_eq!(rig.target_pitch, target_pitch - 0.2, epsilon = 1e-5);
        assert_eq!(rig.yaw, yaw);
        assert_eq!(rig.pitch, pitch);
    }

    #[test]
    fn move_without_session_is_a_no_op() {
        let (mut rig, mut mapper) = rig_and_mapper();
        let before = (rig.clone(), mapper.clone());
        mapper.pointer_move(&mut rig, 500.0, -300.0);
        assert_eq!((rig, mapper), before);
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let (mut rig, mut mapper) = rig_and_mapper();
        mapper.pointer_down(10.0, 10.0);
        mapper.pointer_up();
        let after_first = (rig.clone(), mapper.clone());
        mapper.pointer_up();
        assert_eq!((rig.clone(), mapper.clone()), after_first);

        mapper.pointer_move(&mut rig, 90.0, 90.0);
        assert_eq!((rig, mapper), after_first);
    }

    #[test]
    fn repeated_pointer_down_resets_reference_point() {
        let (mut rig, mut mapper) = rig_and_mapper();
        let start = rig.target_yaw;
        mapper.pointer_down(0.0, 0.0);
        mapper.pointer_down(40.0, 0.0);
        mapper.pointer_move(&mut rig, 50.0, 0.0);
        assert_relative_eq!(rig.target_yaw, start - 0.1, epsilon = 1e-5);
    }

    #[test]
    fn vertical_drag_clamps_pitch_target() {
        let (mut rig, mut mapper) = rig_and_mapper();
        mapper.pointer_down(0.0, 0.0);
        mapper.pointer_move(&mut rig, 0.0, 10_000.0);
        assert_eq!(rig.target_pitch, rig.limits.max_polar);
        mapper.pointer_move(&mut rig, 0.0, -30_000.0);
        assert_eq!(rig.target_pitch, rig.limits.min_polar);
    }

    #[test]
    fn wheel_zooms_distance() {
        let (mut rig, mut mapper) = rig_and_mapper();
        let before = rig.distance;
        mapper.wheel(&mut rig, 100.0);
        assert_relative_eq!(rig.distance, before + 0.3, epsilon = 1e-5);
    }

    #[test]
    fn cumulative_wheel_stays_in_range() {
        let (mut rig, mut mapper) = rig_and_mapper();
        let deltas = [5000.0, -120.0, 9000.0, -40_000.0, 333.0, -1.0, 1e6, -1e6];
        for delta in deltas {
            mapper.wheel(&mut rig, delta);
            assert!(rig.distance >= rig.limits.min_distance);
            assert!(rig.distance <= rig.limits.max_distance);
        }
    }
}
