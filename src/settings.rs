//! Runtime view of the viewer tunables
//!
//! `ViewerSettings` defaults to the constants in [`crate::config`]. Hosts can
//! hand a JSON document to [`ViewerSettings::from_json`]; missing fields keep
//! their defaults.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ViewerError, ViewerResult};

/// Orbit rig parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitSettings {
    pub initial_distance: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub target: [f32; 3],
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub smoothing_factor: f32,
    pub fov_degrees: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        use config::camera::*;
        Self {
            initial_distance: INITIAL_DISTANCE,
            initial_yaw: INITIAL_YAW,
            initial_pitch: INITIAL_PITCH,
            target: TARGET,
            min_polar: MIN_POLAR,
            max_polar: MAX_POLAR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            smoothing_factor: SMOOTHING_FACTOR,
            fov_degrees: FOV_DEGREES,
        }
    }
}

/// Pointer and wheel sensitivities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputSettings {
    pub drag_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: config::input::DRAG_SENSITIVITY,
            zoom_sensitivity: config::input::ZOOM_SENSITIVITY,
        }
    }
}

/// Status animation timing and colors (sRGB bytes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationSettings {
    pub clock_rate: f32,
    pub pulse_frequency: f32,
    pub fan_spin_per_frame: f32,
    pub compressor_fan_spin_per_frame: f32,
    pub critical: [[u8; 3]; 2],
    pub warning: [[u8; 3]; 2],
    pub good_resting: [u8; 3],
    pub indicator_critical: [u8; 3],
    pub indicator_warning: [u8; 3],
    pub indicator_good: [u8; 3],
}

impl Default for AnimationSettings {
    fn default() -> Self {
        use config::animation::*;
        use config::colors::*;
        Self {
            clock_rate: CLOCK_RATE,
            pulse_frequency: PULSE_FREQUENCY,
            fan_spin_per_frame: FAN_SPIN_PER_FRAME,
            compressor_fan_spin_per_frame: COMPRESSOR_FAN_SPIN_PER_FRAME,
            critical: [CRITICAL_DIM, CRITICAL_BRIGHT],
            warning: [WARNING_DIM, WARNING_BRIGHT],
            good_resting: GOOD_RESTING,
            indicator_critical: INDICATOR_CRITICAL,
            indicator_warning: INDICATOR_WARNING,
            indicator_good: INDICATOR_GOOD,
        }
    }
}

/// Asset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetSettings {
    pub model_path: String,
    /// `None` disables image-based lighting
    pub environment: Option<EnvironmentMaps>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentMaps {
    pub diffuse_path: String,
    pub specular_path: String,
    pub intensity: f32,
}

impl Default for AssetSettings {
    fn default() -> Self {
        use config::assets::*;
        Self {
            model_path: MODEL_PATH.to_string(),
            environment: Some(EnvironmentMaps {
                diffuse_path: ENVIRONMENT_DIFFUSE_PATH.to_string(),
                specular_path: ENVIRONMENT_SPECULAR_PATH.to_string(),
                intensity: ENVIRONMENT_INTENSITY,
            }),
        }
    }
}

/// All viewer tunables
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerSettings {
    pub orbit: OrbitSettings,
    pub input: InputSettings,
    pub animation: AnimationSettings,
    pub assets: AssetSettings,
}

impl ViewerSettings {
    /// Decode settings from JSON and check their limits
    pub fn from_json(json: &str) -> ViewerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ViewerResult<()> {
        let orbit = &self.orbit;
        // Strictly inside the poles, so the look-at up vector never degenerates
        if !(orbit.min_polar > -FRAC_PI_2 && orbit.max_polar < FRAC_PI_2) {
            return Err(ViewerError::InvalidSettings(format!(
                "polar range [{}, {}] must lie strictly between -pi/2 and pi/2",
                orbit.min_polar, orbit.max_polar
            )));
        }
        if orbit.min_polar > orbit.max_polar {
            return Err(ViewerError::InvalidSettings(format!(
                "minPolar {} exceeds maxPolar {}",
                orbit.min_polar, orbit.max_polar
            )));
        }
        if orbit.min_distance <= 0.0 || orbit.min_distance > orbit.max_distance {
            return Err(ViewerError::InvalidSettings(format!(
                "zoom range [{}, {}] is empty or not positive",
                orbit.min_distance, orbit.max_distance
            )));
        }
        if !(0.0..=1.0).contains(&orbit.smoothing_factor) {
            return Err(ViewerError::InvalidSettings(format!(
                "smoothingFactor {} is outside [0, 1]",
                orbit.smoothing_factor
            )));
        }
        Ok(())
    }
}

/// Convert an sRGB byte triple into a Bevy color
pub fn srgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}
