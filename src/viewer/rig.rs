//! Spherical camera rig
//!
//! Orbit state for a camera circling a fixed target. Input only moves the
//! *target* angles; [`OrbitRig::update`] is the single place the visible
//! angles advance, closing a fixed fraction of the gap each frame.

use bevy::prelude::*;

use crate::settings::OrbitSettings;

/// Clamp bounds for pitch and distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Orbit camera state in spherical coordinates
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitRig {
    /// Distance from the camera to the target, always within the zoom limits
    pub distance: f32,
    /// The point the camera orbits around
    pub target: Vec3,
    /// Current horizontal angle (radians)
    pub yaw: f32,
    /// Current vertical angle (radians), always within the polar limits
    pub pitch: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub limits: OrbitLimits,
    /// Fraction of the remaining angular gap closed per `update`
    pub smoothing: f32,
}

impl OrbitRig {
    pub fn new(settings: &OrbitSettings) -> Self {
        let limits = OrbitLimits {
            min_polar: settings.min_polar,
            max_polar: settings.max_polar,
            min_distance: settings.min_distance,
            max_distance: settings.max_distance,
        };
        let pitch = settings
            .initial_pitch
            .clamp(limits.min_polar, limits.max_polar);
        Self {
            distance: settings
                .initial_distance
                .clamp(limits.min_distance, limits.max_distance),
            target: Vec3::from_array(settings.target),
            yaw: settings.initial_yaw,
            pitch,
            target_yaw: settings.initial_yaw,
            target_pitch: pitch,
            limits,
            smoothing: settings.smoothing_factor,
        }
    }

    /// Rotate the yaw target by `delta` radians
    pub fn nudge_yaw(&mut self, delta: f32) {
        self.target_yaw += delta;
    }

    /// Tilt the pitch target by `delta` radians, clamped to the polar limits
    pub fn nudge_pitch(&mut self, delta: f32) {
        self.target_pitch =
            (self.target_pitch + delta).clamp(self.limits.min_polar, self.limits.max_polar);
    }

    /// Move the camera along its view ray, clamped to the zoom limits
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta).clamp(self.limits.min_distance, self.limits.max_distance);
    }

    /// Advance one frame of exponential smoothing toward the targets
    pub fn update(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * self.smoothing;
        self.pitch += (self.target_pitch - self.pitch) * self.smoothing;
        self.pitch = self.pitch.clamp(self.limits.min_polar, self.limits.max_polar);
    }

    /// Camera position for the current angles and distance
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.yaw.sin() * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.yaw.cos() * self.pitch.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Look-at transform for the camera, +Y up
    pub fn camera_transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(&OrbitSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn initial_eye_matches_spherical_formula() {
        let rig = OrbitRig::default();
        let d = rig.distance;
        let expected = Vec3::new(
            d * rig.yaw.sin() * rig.pitch.cos(),
            d * rig.pitch.sin() + 1.0,
            d * rig.yaw.cos() * rig.pitch.cos(),
        );
        let eye = rig.eye();
        assert_relative_eq!(eye.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(eye.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(eye.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn camera_looks_at_target() {
        let rig = OrbitRig::default();
        let transform = rig.camera_transform();
        let to_target = (rig.target - transform.translation).normalize();
        let forward = transform.forward();
        assert_relative_eq!(forward.dot(to_target), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn smoothing_converges_without_overshoot() {
        let mut rig = OrbitRig::default();
        rig.nudge_yaw(1.2);
        rig.nudge_pitch(0.6);
        let mut last_gap = (rig.target_yaw - rig.yaw).abs();
        for _ in 0..200 {
            rig.update();
            let gap = (rig.target_yaw - rig.yaw).abs();
            assert!(gap <= last_gap);
            assert!(rig.yaw <= rig.target_yaw);
            assert!(rig.pitch <= rig.target_pitch);
            last_gap = gap;
        }
        assert!(last_gap < 1e-4);
    }

    #[test]
    fn each_update_closes_a_tenth_of_the_gap() {
        let mut rig = OrbitRig::default();
        let start = rig.yaw;
        rig.nudge_yaw(1.0);
        rig.update();
        assert_relative_eq!(rig.yaw - start, 0.1, epsilon = 1e-5);
    }

    #[test]
    fn pitch_target_is_clamped() {
        let mut rig = OrbitRig::default();
        rig.nudge_pitch(100.0);
        assert_eq!(rig.target_pitch, rig.limits.max_polar);
        rig.nudge_pitch(-1000.0);
        assert_eq!(rig.target_pitch, rig.limits.min_polar);
        for _ in 0..500 {
            rig.update();
            assert!(rig.pitch >= rig.limits.min_polar && rig.pitch <= rig.limits.max_polar);
        }
    }

    #[test]
    fn zoom_is_clamped_both_ways() {
        let mut rig = OrbitRig::default();
        for _ in 0..1000 {
            rig.zoom(10.0);
        }
        assert_eq!(rig.distance, rig.limits.max_distance);
        for _ in 0..1000 {
            rig.zoom(-10.0);
        }
        assert_eq!(rig.distance, rig.limits.min_distance);
    }

    #[test]
    fn out_of_range_initial_values_are_clamped() {
        let settings = OrbitSettings {
            initial_distance: 50.0,
            initial_pitch: 3.0,
            ..Default::default()
        };
        let rig = OrbitRig::new(&settings);
        assert_eq!(rig.distance, settings.max_distance);
        assert_eq!(rig.pitch, settings.max_polar);
        assert_eq!(rig.target_pitch, settings.max_polar);
    }
}
