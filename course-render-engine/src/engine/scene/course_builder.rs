use bevy::prelude::*;

use crate::constants::feature_styles::{
    BACKGROUND_HEIGHT, BRIDGE_HEIGHT, BRIDGE_STYLE, CENTRAL_PATH_STYLE, CENTRAL_PATH_WIDTH,
    CLUBHOUSE_HEIGHT, CLUBHOUSE_STYLE, CREEK_STYLE, CREEK_WIDTH, FAIRWAY_HEIGHT, FAIRWAY_STYLE,
    GREEN_CENTER_RADIUS, GREEN_CENTER_STYLE, GREEN_HEIGHT, GREEN_STYLE, PATH_STYLE, PATH_WIDTH,
    PERIMETER_STYLE, PERIMETER_WIDTH, TEEBOX_CENTER_RADIUS, TEEBOX_CENTER_STYLE, TEEBOX_HEIGHT,
    TEEBOX_STYLE, WATER_HEIGHT, WATER_STYLE, background_style,
};
use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::assets::vector_overlay::{FeatureShape, VectorOverlay};
use crate::engine::geometry::grid_mapper::recenter_offset;
use crate::engine::geometry::marker::place_marker;
use crate::engine::geometry::mesh_buffer::{StyledMesh, SurfaceStyle};
use crate::engine::geometry::polygon::build_polygon;
use crate::engine::geometry::ribbon::build_ribbon;
use crate::engine::geometry::terrain_mesh::build_terrain_mesh;
use crate::engine::scene::markers::{spawn_hole_flag, spawn_sphere_marker, spawn_tree};
use crate::engine::scene::sky::spawn_sky;

/// Root entity of one generated course scene.
#[derive(Component)]
pub struct CourseRoot;

/// Build the full course scene from the published resources.
///
/// Rebuilding is a full regeneration: any previous course root is despawned
/// wholesale first, there is no incremental diffing.
pub fn spawn_course_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    grid: Res<ElevationGrid>,
    overlay: Res<VectorOverlay>,
    existing: Query<Entity, With<CourseRoot>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    spawn_course(&mut commands, &mut meshes, &mut materials, &grid, &overlay);
    println!("✓ Course scene built");
}

/// Feature layering policy: walk every category in fixed draw order and
/// dispatch each shape to the polygon, ribbon, or marker path with its style
/// parameters. Sky and background go first, then the terrain, then the
/// overlay layers — translucent water and ribbons must come after the opaque
/// geometry they blend over. Per-shape failures are skipped, never fatal.
pub fn spawn_course(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    grid: &ElevationGrid,
    overlay: &VectorOverlay,
) -> Entity {
    let root = commands
        .spawn((
            CourseRoot,
            Name::new("course"),
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .id();

    spawn_sky(commands, meshes, materials, root);

    for shape in overlay.backgrounds() {
        let style = background_style(shape.description_code());
        spawn_polygon_shape(
            commands, meshes, materials, root, shape, grid, BACKGROUND_HEIGHT, style,
            "background",
        );
    }

    // Base terrain is recentred via its transform; overlay builders bake the
    // same offset into their vertices so all layers align exactly.
    let terrain = build_terrain_mesh(grid);
    let (center_x, center_z) = recenter_offset(grid);
    spawn_styled_mesh(
        commands,
        meshes,
        materials,
        root,
        terrain,
        Transform::from_xyz(-center_x, 0.0, -center_z),
        "terrain",
    );

    for shape in overlay.waters() {
        spawn_polygon_shape(
            commands, meshes, materials, root, shape, grid, WATER_HEIGHT, WATER_STYLE, "water",
        );
    }
    for shape in overlay.creeks() {
        spawn_ribbon_shape(
            commands, meshes, materials, root, shape, grid, CREEK_WIDTH, CREEK_STYLE, "creek",
        );
    }

    spawn_holes(commands, meshes, materials, root, grid, overlay);

    for shape in overlay.paths() {
        spawn_ribbon_shape(
            commands, meshes, materials, root, shape, grid, PATH_WIDTH, PATH_STYLE, "path",
        );
    }
    for shape in overlay.bridges() {
        spawn_polygon_shape(
            commands, meshes, materials, root, shape, grid, BRIDGE_HEIGHT, BRIDGE_STYLE, "bridge",
        );
    }

    for shape in overlay.trees() {
        // Only the first point anchors a tree; shapes with no usable point
        // or an out-of-grid anchor are skipped whole.
        let Some(&point) = shape.parsed_points().first() else {
            continue;
        };
        match place_marker(point, grid, 0.0) {
            Some(anchor) => {
                spawn_tree(commands, meshes, materials, root, anchor, shape.size_class());
            }
            None => warn!("skipping tree outside the elevation grid"),
        }
    }

    for shape in overlay.clubhouses() {
        spawn_polygon_shape(
            commands, meshes, materials, root, shape, grid, CLUBHOUSE_HEIGHT, CLUBHOUSE_STYLE,
            "clubhouse",
        );
    }

    root
}

fn spawn_holes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    grid: &ElevationGrid,
    overlay: &VectorOverlay,
) {
    for hole in overlay.holes() {
        for shape in hole.perimeters() {
            spawn_ribbon_shape(
                commands, meshes, materials, root, shape, grid, PERIMETER_WIDTH, PERIMETER_STYLE,
                "perimeter",
            );
        }
        for shape in hole.fairways() {
            spawn_polygon_shape(
                commands, meshes, materials, root, shape, grid, FAIRWAY_HEIGHT, FAIRWAY_STYLE,
                "fairway",
            );
        }
        for shape in hole.greens() {
            spawn_polygon_shape(
                commands, meshes, materials, root, shape, grid, GREEN_HEIGHT, GREEN_STYLE, "green",
            );
        }
        for shape in hole.teeboxes() {
            spawn_polygon_shape(
                commands, meshes, materials, root, shape, grid, TEEBOX_HEIGHT, TEEBOX_STYLE,
                "teebox",
            );
        }
        for shape in hole.central_paths() {
            spawn_ribbon_shape(
                commands, meshes, materials, root, shape, grid, CENTRAL_PATH_WIDTH,
                CENTRAL_PATH_STYLE, "central-path",
            );
        }

        for shape in hole.green_centers() {
            spawn_center_marker(
                commands, meshes, materials, root, shape, grid, GREEN_CENTER_RADIUS,
                GREEN_CENTER_STYLE, "green-center",
            );
        }
        for shape in hole.teebox_centers() {
            spawn_center_marker(
                commands, meshes, materials, root, shape, grid, TEEBOX_CENTER_RADIUS,
                TEEBOX_CENTER_STYLE, "teebox-center",
            );
        }

        // The flag needs both the hole number and a green-centre anchor;
        // missing either skips this hole's flag without affecting the rest.
        if let (Some(number), Some(point)) = (hole.hole_number, hole.green_center_anchor()) {
            match place_marker(point, grid, 0.0) {
                Some(anchor) => {
                    spawn_hole_flag(commands, meshes, materials, root, anchor, number);
                }
                None => warn!("skipping flag for hole {number}: green centre outside the grid"),
            }
        }
    }
}

fn spawn_polygon_shape(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    shape: &FeatureShape,
    grid: &ElevationGrid,
    height_offset: f32,
    style: SurfaceStyle,
    label: &'static str,
) {
    match build_polygon(&shape.parsed_points(), grid, height_offset, style) {
        Some(mesh) => {
            spawn_styled_mesh(
                commands,
                meshes,
                materials,
                root,
                mesh,
                Transform::IDENTITY,
                label,
            );
        }
        None => warn!("skipping {label} shape: fewer than 3 points inside the elevation grid"),
    }
}

fn spawn_ribbon_shape(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    shape: &FeatureShape,
    grid: &ElevationGrid,
    width: f32,
    style: SurfaceStyle,
    label: &'static str,
) {
    match build_ribbon(&shape.parsed_points(), grid, width, style) {
        Some(mesh) => {
            spawn_styled_mesh(
                commands,
                meshes,
                materials,
                root,
                mesh,
                Transform::IDENTITY,
                label,
            );
        }
        None => warn!("skipping {label} shape: fewer than 2 points inside the elevation grid"),
    }
}

fn spawn_center_marker(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    shape: &FeatureShape,
    grid: &ElevationGrid,
    radius: f32,
    style: SurfaceStyle,
    label: &'static str,
) {
    let Some(&point) = shape.parsed_points().first() else {
        return;
    };
    // Sphere markers rest on the terrain, so the anchor is lifted by the
    // radius.
    match place_marker(point, grid, radius) {
        Some(anchor) => {
            spawn_sphere_marker(
                commands, meshes, materials, root, anchor, radius, style, label,
            );
        }
        None => warn!("skipping {label} marker outside the elevation grid"),
    }
}

fn spawn_styled_mesh(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    root: Entity,
    styled: StyledMesh,
    transform: Transform,
    label: &'static str,
) {
    commands.spawn((
        Name::new(label),
        Mesh3d(meshes.add(styled.buffer.into_mesh())),
        MeshMaterial3d(materials.add(styled.style.material())),
        transform,
        ChildOf(root),
    ));
}
