/// Orbit camera tuning passed to the controller as one immutable block.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraConfig {
    /// Degrees of orbit per pixel of mouse drag.
    pub rotate_speed: f32,
    /// Fractional distance change per scroll line.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Elevation clamp keeps the camera off the horizon and the zenith.
    pub min_elevation_deg: f32,
    pub max_elevation_deg: f32,
}

pub const ORBIT_CAMERA: OrbitCameraConfig = OrbitCameraConfig {
    rotate_speed: 0.3,
    zoom_speed: 0.1,
    min_distance: 30.0,
    max_distance: 500.0,
    min_elevation_deg: 10.0,
    max_elevation_deg: 170.0,
};

/// Initial orbit placement looking down at the course centre.
pub const INITIAL_DISTANCE: f32 = 150.0;
pub const INITIAL_ELEVATION_DEG: f32 = 120.0;
pub const INITIAL_AZIMUTH_DEG: f32 = 33.0;

/// Scene lighting levels.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;
pub const SUN_ILLUMINANCE: f32 = 9_000.0;
