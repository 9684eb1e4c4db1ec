use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::render_settings::{
    INITIAL_AZIMUTH_DEG, INITIAL_DISTANCE, INITIAL_ELEVATION_DEG, ORBIT_CAMERA, OrbitCameraConfig,
};

/// Orbit camera state around the course centre.
///
/// The terrain is recentred on the world origin, so the default target is
/// zero. All updates go through the clamped methods below with an explicit
/// config block; nothing mutates the camera from event handlers directly.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: INITIAL_DISTANCE,
            elevation_deg: INITIAL_ELEVATION_DEG,
            azimuth_deg: INITIAL_AZIMUTH_DEG,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a mouse drag delta: x drags orbit the azimuth, y drags tilt
    /// the elevation within the configured clamp.
    pub fn rotate(&mut self, delta: Vec2, config: &OrbitCameraConfig) {
        self.azimuth_deg += delta.x * config.rotate_speed;
        self.elevation_deg = (self.elevation_deg - delta.y * config.rotate_speed)
            .clamp(config.min_elevation_deg, config.max_elevation_deg);
    }

    /// Scale the orbit distance, clamped to the configured range.
    pub fn zoom(&mut self, factor: f32, config: &OrbitCameraConfig) {
        self.distance = (self.distance * factor).clamp(config.min_distance, config.max_distance);
    }

    /// Spherical placement around the target, looking back at it.
    pub fn transform(&self) -> Transform {
        let elevation = self.elevation_deg.to_radians();
        let azimuth = self.azimuth_deg.to_radians();

        let height = self.distance * elevation.sin();
        let horizontal = self.distance * elevation.cos();
        let position = self.target
            + Vec3::new(
                horizontal * azimuth.cos(),
                height,
                horizontal * azimuth.sin(),
            );

        Transform::from_translation(position).looking_at(self.target, Vec3::Y)
    }
}

/// Apply mouse input to the orbit camera and reposition the 3D camera.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.rotate(mouse_delta, &ORBIT_CAMERA);
    }

    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(1.0 - scroll_accum * ORBIT_CAMERA.zoom_speed, &ORBIT_CAMERA);
    }

    *camera_transform = orbit.transform();
}
