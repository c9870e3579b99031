//! Status animation engine
//!
//! Turns a [`StatusSnapshot`] and the animation clock into per-frame
//! [`PartEffect`]s. The engine is pure; `systems::animation` applies the
//! effects to transforms and materials, skipping any that cannot land.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::{srgb, AnimationSettings};
use crate::viewer::binder::{PartBinding, PartKey};

/// Health tier of a monitored part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusValue {
    #[default]
    Good,
    Warning,
    Critical,
}

/// Current status of every monitored part
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub fan: StatusValue,
    pub compressor1: StatusValue,
    pub compressor2: StatusValue,
    /// Everything not covered above, including the gas line
    pub other: StatusValue,
}

impl Default for StatusSnapshot {
    /// Static demo values until telemetry is wired in
    fn default() -> Self {
        Self {
            fan: StatusValue::Warning,
            compressor1: StatusValue::Critical,
            compressor2: StatusValue::Warning,
            other: StatusValue::Good,
        }
    }
}

impl StatusSnapshot {
    pub fn all(status: StatusValue) -> Self {
        Self {
            fan: status,
            compressor1: status,
            compressor2: status,
            other: status,
        }
    }

    /// Status driving a part's color, `None` for parts that only spin
    pub fn for_part(&self, key: PartKey) -> Option<StatusValue> {
        match key {
            PartKey::Fan | PartKey::StatusIndicatorFan => Some(self.fan),
            PartKey::Compressor1 | PartKey::StatusIndicatorC1 => Some(self.compressor1),
            PartKey::Compressor2 | PartKey::StatusIndicatorC2 => Some(self.compressor2),
            PartKey::GasTube | PartKey::StatusIndicatorOther => Some(self.other),
            PartKey::CompressorFan1 | PartKey::CompressorFan2 => None,
        }
    }
}

/// Dim and bright ends of a pulsing tier color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    pub dim: Color,
    pub bright: Color,
}

impl ColorRamp {
    /// Interpolate in linear space; `t = 0` is dim, `t = 1` is bright
    pub fn sample(&self, t: f32) -> Color {
        let dim = self.dim.to_linear();
        let bright = self.bright.to_linear();
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Color::from(LinearRgba::new(
            mix(dim.red, bright.red),
            mix(dim.green, bright.green),
            mix(dim.blue, bright.blue),
            mix(dim.alpha, bright.alpha),
        ))
    }
}

/// Rest or pulse: how a part in the given tier is tinted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPalette {
    pub critical: ColorRamp,
    pub warning: ColorRamp,
    pub good_resting: Color,
    pub indicator_critical: Color,
    pub indicator_warning: Color,
    pub indicator_good: Color,
}

impl StatusPalette {
    pub fn from_settings(settings: &AnimationSettings) -> Self {
        Self {
            critical: ColorRamp {
                dim: srgb(settings.critical[0]),
                bright: srgb(settings.critical[1]),
            },
            warning: ColorRamp {
                dim: srgb(settings.warning[0]),
                bright: srgb(settings.warning[1]),
            },
            good_resting: srgb(settings.good_resting),
            indicator_critical: srgb(settings.indicator_critical),
            indicator_warning: srgb(settings.indicator_warning),
            indicator_good: srgb(settings.indicator_good),
        }
    }

    pub fn indicator(&self, status: StatusValue) -> Color {
        match status {
            StatusValue::Critical => self.indicator_critical,
            StatusValue::Warning => self.indicator_warning,
            StatusValue::Good => self.indicator_good,
        }
    }
}

/// `(sin(clock * k) + 1) / 2`, in `[0, 1]`
pub fn pulse(clock: f32, frequency: f32) -> f32 {
    ((clock * frequency).sin() + 1.0) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
}

/// One visual change for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartEffect {
    /// Rotate about a local axis by `radians`
    Spin {
        entity: Entity,
        axis: SpinAxis,
        radians: f32,
    },
    /// Set the surface base color
    Tint { entity: Entity, color: Color },
}

/// Computes per-frame effects from status and time
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StatusAnimator {
    pub palette: StatusPalette,
    pub clock_rate: f32,
    pub pulse_frequency: f32,
    pub fan_spin: f32,
    pub compressor_fan_spin: f32,
    /// The gas tube's own material color, captured when the model is bound.
    /// A healthy tube returns to it; until it is known the tube is left alone.
    pub gas_tube_authored: Option<Color>,
}

const SPINNING: [(PartKey, SpinAxis); 3] = [
    (PartKey::Fan, SpinAxis::X),
    (PartKey::CompressorFan1, SpinAxis::Y),
    (PartKey::CompressorFan2, SpinAxis::Y),
];

const SURFACE_TINTED: [PartKey; 4] = [
    PartKey::Fan,
    PartKey::Compressor1,
    PartKey::Compressor2,
    PartKey::GasTube,
];

const INDICATORS: [PartKey; 4] = [
    PartKey::StatusIndicatorFan,
    PartKey::StatusIndicatorC1,
    PartKey::StatusIndicatorC2,
    PartKey::StatusIndicatorOther,
];

impl StatusAnimator {
    pub fn new(settings: &AnimationSettings) -> Self {
        Self {
            palette: StatusPalette::from_settings(settings),
            clock_rate: settings.clock_rate,
            pulse_frequency: settings.pulse_frequency,
            fan_spin: settings.fan_spin_per_frame,
            compressor_fan_spin: settings.compressor_fan_spin_per_frame,
            gas_tube_authored: None,
        }
    }

    /// Animation clock for `elapsed_secs` of wall time
    pub fn clock(&self, elapsed_secs: f32) -> f32 {
        elapsed_secs * self.clock_rate
    }

    /// Surface color of a part in `status` at `clock`, `None` to leave it as is
    pub fn surface_color(&self, key: PartKey, status: StatusValue, clock: f32) -> Option<Color> {
        let ramp = match status {
            StatusValue::Critical => self.palette.critical,
            StatusValue::Warning => self.palette.warning,
            StatusValue::Good if key == PartKey::GasTube => return self.gas_tube_authored,
            StatusValue::Good => return Some(self.palette.good_resting),
        };
        Some(ramp.sample(pulse(clock, self.pulse_frequency)))
    }

    /// Effects for one frame. Unbound parts produce nothing.
    pub fn tick(&self, clock: f32, snapshot: &StatusSnapshot, binding: &PartBinding) -> Vec<PartEffect> {
        let mut effects = Vec::with_capacity(PartKey::COUNT + SPINNING.len());

        for (key, axis) in SPINNING {
            let Some(entity) = binding.get(key) else {
                continue;
            };
            let radians = match axis {
                SpinAxis::X => self.fan_spin,
                SpinAxis::Y => self.compressor_fan_spin,
            };
            effects.push(PartEffect::Spin {
                entity,
                axis,
                radians,
            });
        }

        for key in SURFACE_TINTED {
            let (Some(entity), Some(status)) = (binding.get(key), snapshot.for_part(key)) else {
                continue;
            };
            let Some(color) = self.surface_color(key, status, clock) else {
                continue;
            };
            effects.push(PartEffect::Tint { entity, color });
        }

        for key in INDICATORS {
            let (Some(entity), Some(status)) = (binding.get(key), snapshot.for_part(key)) else {
                continue;
            };
            effects.push(PartEffect::Tint {
                entity,
                color: self.palette.indicator(status),
            });
        }

        effects
    }
}

impl Default for StatusAnimator {
    fn default() -> Self {
        Self::new(&AnimationSettings::default())
    }
}
