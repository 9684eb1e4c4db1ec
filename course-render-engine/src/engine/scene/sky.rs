use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::constants::feature_styles::{SKY_COLOUR, SKY_RADIUS};

/// Spawn the sky dome: a large unlit sphere inverted so the camera sees its
/// inside. Drawn before every course layer.
pub fn spawn_sky(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
) {
    commands.spawn((
        Name::new("sky"),
        Mesh3d(meshes.add(Sphere::new(SKY_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SKY_COLOUR,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::from_scale(Vec3::new(-1.0, 1.0, 1.0)),
        NoFrustumCulling,
        ChildOf(root),
    ));
}
