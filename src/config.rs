//! Configuration constants for the rooftop unit viewer
//!
//! Every tunable of the viewer runtime lives here. The values are
//! compile-time constants; `crate::settings::ViewerSettings` bundles them
//! into a resource so hosts and tests can override individual values.

/// Orbit camera defaults and limits
pub mod camera {
    use std::f32::consts::{FRAC_PI_2, PI};

    /// Initial distance from the orbit target
    pub const INITIAL_DISTANCE: f32 = 5.5;

    /// Initial horizontal angle (radians)
    pub const INITIAL_YAW: f32 = PI / 1.6;

    /// Initial vertical angle (radians), slightly above the unit
    pub const INITIAL_PITCH: f32 = 0.1;

    /// Point the camera orbits around (center of the equipment)
    pub const TARGET: [f32; 3] = [0.0, 1.0, 0.0];

    /// Lowest allowed pitch, kept away from the pole so the up vector never flips
    pub const MIN_POLAR: f32 = -FRAC_PI_2 + 0.15;

    /// Highest allowed pitch
    pub const MAX_POLAR: f32 = FRAC_PI_2 - 0.15;

    /// Closest zoom
    pub const MIN_DISTANCE: f32 = 2.5;

    /// Farthest zoom
    pub const MAX_DISTANCE: f32 = 8.0;

    /// Fraction of the remaining angular gap closed per frame
    pub const SMOOTHING_FACTOR: f32 = 0.1;

    /// Vertical field of view (degrees)
    pub const FOV_DEGREES: f32 = 75.0;

    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;
}

/// Pointer and wheel mapping
pub mod input {
    /// Radians of orbit per pixel of drag
    pub const DRAG_SENSITIVITY: f32 = 0.01;

    /// Distance units per pixel of wheel delta
    pub const ZOOM_SENSITIVITY: f32 = 0.003;

    /// Pixels reported per wheel "line" on line-based devices
    pub const LINE_DELTA_PIXELS: f32 = 100.0;
}

/// Status animation settings
pub mod animation {
    /// Animation clock units per second of elapsed time
    pub const CLOCK_RATE: f32 = 2.5;

    /// Pulse angular frequency `k` in `sin(clock * k)`
    pub const PULSE_FREQUENCY: f32 = 2.0;

    /// Evaporator fan spin per frame (radians, local X)
    pub const FAN_SPIN_PER_FRAME: f32 = 0.08;

    /// Compressor fan spin per frame (radians, local Y)
    pub const COMPRESSOR_FAN_SPIN_PER_FRAME: f32 = 0.09;
}

/// sRGB colors per status tier
pub mod colors {
    pub const CRITICAL_DIM: [u8; 3] = [0x70, 0x13, 0x13];
    pub const CRITICAL_BRIGHT: [u8; 3] = [0xDB, 0x37, 0x35];

    pub const WARNING_DIM: [u8; 3] = [0x97, 0x58, 0x00];
    pub const WARNING_BRIGHT: [u8; 3] = [0xFF, 0x8C, 0x47];

    /// Resting color of machine parts in good health
    pub const GOOD_RESTING: [u8; 3] = [0x00, 0x00, 0x00];

    pub const INDICATOR_CRITICAL: [u8; 3] = [0xE5, 0x39, 0x35];
    pub const INDICATOR_WARNING: [u8; 3] = [0xFF, 0x8C, 0x00];
    pub const INDICATOR_GOOD: [u8; 3] = [0x43, 0xA0, 0x47];

    /// Window clear color
    pub const BACKGROUND: [u8; 3] = [0xF0, 0xF0, 0xF0];
}

/// Asset locations, relative to the Bevy asset directory
pub mod assets {
    /// Binary glTF scene of the rooftop unit
    pub const MODEL_PATH: &str = "models/rooftop_unit.glb";

    /// Prefiltered environment cubemaps used for image-based lighting only
    pub const ENVIRONMENT_DIFFUSE_PATH: &str = "lights/studio_diffuse.ktx2";
    pub const ENVIRONMENT_SPECULAR_PATH: &str = "lights/studio_specular.ktx2";

    /// Environment lighting intensity (cd/m^2)
    pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
}

/// Lights and window
pub mod scene {
    /// Ambient light brightness (cd/m^2)
    pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

    /// Key light illuminance (lux)
    pub const KEY_LIGHT_ILLUMINANCE: f32 = 4000.0;

    /// Key light position, aimed at the origin
    pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.5];

    pub const WINDOW_TITLE: &str = "Rooftop Unit Viewer";
}
