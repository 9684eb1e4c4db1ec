use bevy::prelude::*;

use crate::constants::feature_styles::{
    FLAG_OFFSET, FLAG_POLE_HEIGHT, FLAG_POLE_RADIUS, FLAG_POLE_STYLE, FLAG_SIZE, FLAG_STYLE,
    TREE_BASE_SCALE, TREE_CANOPY_STYLE, TREE_SIZE_SCALE, TREE_TRUNK_RADIUS, TREE_TRUNK_STYLE,
};
use crate::engine::geometry::mesh_buffer::SurfaceStyle;

/// Composite point features assembled from primitive meshes around a
/// terrain-anchored transform. The anchor computation (and its out-of-bounds
/// rejection) lives in `geometry::marker`; these helpers only stack the
/// primitives.

/// Trunk plus canopy, both scaled by the shape's size class.
pub fn spawn_tree(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    anchor: Vec3,
    size_class: i32,
) {
    let trunk_height = TREE_BASE_SCALE + size_class as f32 * TREE_SIZE_SCALE;
    let canopy_radius = TREE_BASE_SCALE + size_class as f32 * TREE_SIZE_SCALE;

    let tree = commands
        .spawn((
            Name::new("tree"),
            Transform::from_translation(anchor),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(TREE_TRUNK_RADIUS, trunk_height))),
        MeshMaterial3d(materials.add(TREE_TRUNK_STYLE.material())),
        Transform::from_xyz(0.0, trunk_height / 2.0, 0.0),
        ChildOf(tree),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(canopy_radius))),
        MeshMaterial3d(materials.add(TREE_CANOPY_STYLE.material())),
        Transform::from_xyz(0.0, trunk_height + canopy_radius, 0.0),
        ChildOf(tree),
    ));
}

/// Plain sphere marker for green and teebox centres.
pub fn spawn_sphere_marker(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    anchor: Vec3,
    radius: f32,
    style: SurfaceStyle,
    label: &'static str,
) {
    commands.spawn((
        Name::new(label),
        Mesh3d(meshes.add(Sphere::new(radius))),
        MeshMaterial3d(materials.add(style.material())),
        Transform::from_translation(anchor),
        ChildOf(root),
    ));
}

/// White pole with a red flag cuboid near the top, anchored at the hole's
/// green centre.
pub fn spawn_hole_flag(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    anchor: Vec3,
    hole_number: i32,
) {
    let flag = commands
        .spawn((
            Name::new(format!("hole-{hole_number}-flag")),
            Transform::from_translation(anchor),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(FLAG_POLE_RADIUS, FLAG_POLE_HEIGHT))),
        MeshMaterial3d(materials.add(FLAG_POLE_STYLE.material())),
        Transform::from_xyz(0.0, FLAG_POLE_HEIGHT / 2.0, 0.0),
        ChildOf(flag),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(FLAG_SIZE.x, FLAG_SIZE.y, FLAG_SIZE.z))),
        MeshMaterial3d(materials.add(FLAG_STYLE.material())),
        Transform::from_translation(FLAG_OFFSET),
        ChildOf(flag),
    ));
}
