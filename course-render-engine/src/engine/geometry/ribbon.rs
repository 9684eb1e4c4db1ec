use bevy::prelude::*;

use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::geometry::grid_mapper::sample_world_position;
use crate::engine::geometry::mesh_buffer::{MeshBuffer, StyledMesh, SurfaceStyle};
use crate::engine::geometry::point_string::GeoPoint;

/// Ribbons float slightly above the terrain so they never z-fight the ground
/// mesh or the polygon slabs beneath them.
const RIBBON_LIFT: f32 = 0.1;

/// Build a constant-width two-sided strip along a polyline (paths, creeks,
/// hole centre lines).
///
/// Every point emits a vertex pair offset ±width/2 along the perpendicular of
/// its forward segment, computed from the geographic difference to the next
/// input point. A zero-length segment falls back to the default perpendicular
/// `(0, 1)`. The terminal point has no forward segment and reuses its
/// predecessor's perpendicular — a deliberate edge policy, kept for
/// bit-compatible geometry across rebuilds. Points outside the grid are
/// skipped whole (both vertices), which may shorten the ribbon; the builder
/// reports no mesh when fewer than two valid points survive.
pub fn build_ribbon(
    points: &[GeoPoint],
    grid: &ElevationGrid,
    width: f32,
    style: SurfaceStyle,
) -> Option<StyledMesh> {
    if points.len() < 2 {
        return None;
    }

    let half_width = width / 2.0;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(points.len() * 2);
    let mut perpendicular = Vec2::new(0.0, 1.0);

    for (i, &point) in points.iter().enumerate() {
        let Some(base) = sample_world_position(point, grid, RIBBON_LIFT) else {
            continue;
        };

        if let Some(next) = points.get(i + 1) {
            let direction = Vec2::new(
                (next.longitude - point.longitude) as f32,
                (next.latitude - point.latitude) as f32,
            );
            perpendicular = if direction.length() > 0.0 {
                let forward = direction.normalize();
                Vec2::new(-forward.y, forward.x)
            } else {
                Vec2::new(0.0, 1.0)
            };
        }

        let offset = Vec3::new(
            perpendicular.x * half_width,
            0.0,
            perpendicular.y * half_width,
        );
        positions.push((base + offset).to_array());
        positions.push((base - offset).to_array());
    }

    if positions.len() < 4 {
        return None;
    }

    let mut indices = Vec::with_capacity((positions.len() - 2) * 3);
    for i in (0..positions.len() as u32 - 2).step_by(2) {
        indices.extend_from_slice(&[i, i + 2, i + 1]);
        indices.extend_from_slice(&[i + 1, i + 2, i + 3]);
    }

    if indices.is_empty() {
        return None;
    }

    Some(StyledMesh {
        buffer: MeshBuffer {
            positions,
            normals: Vec::new(),
            uvs: Vec::new(),
            indices,
        },
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::feature_styles::PATH_STYLE;
    use approx::assert_relative_eq;

    #[test]
    fn two_valid_points_make_one_quad() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        let points = vec![GeoPoint::new(1.0, 4.0), GeoPoint::new(4.0, 4.0)];
        let mesh = build_ribbon(&points, &grid, 2.0, PATH_STYLE).unwrap();

        assert_eq!(mesh.buffer.positions.len(), 4);
        assert_eq!(mesh.buffer.triangle_count(), 2);
        assert_eq!(mesh.buffer.indices, vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn terminal_point_reuses_predecessor_perpendicular() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        // Eastward segment: forward (1, 0), perpendicular (0, 1) in lon/lat.
        let points = vec![GeoPoint::new(1.0, 4.0), GeoPoint::new(4.0, 4.0)];
        let mesh = build_ribbon(&points, &grid, 2.0, PATH_STYLE).unwrap();

        // Both pairs are offset along the same axis with the same sign.
        let first_pair_z = mesh.buffer.positions[0][2] - mesh.buffer.positions[1][2];
        let last_pair_z = mesh.buffer.positions[2][2] - mesh.buffer.positions[3][2];
        assert_relative_eq!(first_pair_z, last_pair_z, epsilon = 1e-6);
        assert_relative_eq!(first_pair_z.abs(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn vertex_pairs_straddle_the_centreline_by_half_width() {
        let grid = ElevationGrid::flat(8, 8, 0.0);
        // Northward segment: perpendicular points along longitude.
        let points = vec![GeoPoint::new(3.0, 2.0), GeoPoint::new(3.0, 6.0)];
        let mesh = build_ribbon(&points, &grid, 3.0, PATH_STYLE).unwrap();

        let left = mesh.buffer.positions[0];
        let right = mesh.buffer.positions[1];
        assert_relative_eq!((left[0] - right[0]).abs(), 3.0, epsilon = 1e-6);
        assert_relative_eq!(left[2], right[2], epsilon = 1e-6);
    }

    #[test]
    fn ribbon_floats_above_the_sampled_terrain() {
        let grid = ElevationGrid::flat(6, 6, 5.0);
        let points = vec![GeoPoint::new(1.0, 4.0), GeoPoint::new(4.0, 4.0)];
        let mesh = build_ribbon(&points, &grid, 1.0, PATH_STYLE).unwrap();

        for position in &mesh.buffer.positions {
            assert_relative_eq!(position[1], 5.0 * 0.1 + 0.1, epsilon = 1e-6);
        }
    }

    #[test]
    fn invalid_points_are_skipped_entirely() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        let points = vec![
            GeoPoint::new(1.0, 4.0),
            GeoPoint::new(-3.0, 4.0), // west of the grid
            GeoPoint::new(4.0, 4.0),
        ];
        let mesh = build_ribbon(&points, &grid, 2.0, PATH_STYLE).unwrap();

        // The invalid point contributes no vertex pair at all.
        assert_eq!(mesh.buffer.positions.len(), 4);
    }

    #[test]
    fn fewer_than_two_valid_points_yield_no_mesh() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        assert!(build_ribbon(&[GeoPoint::new(1.0, 4.0)], &grid, 2.0, PATH_STYLE).is_none());

        let mostly_outside = vec![GeoPoint::new(1.0, 4.0), GeoPoint::new(-9.0, 4.0)];
        assert!(build_ribbon(&mostly_outside, &grid, 2.0, PATH_STYLE).is_none());
    }

    #[test]
    fn zero_length_segment_falls_back_to_default_perpendicular() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        let points = vec![GeoPoint::new(2.0, 3.0), GeoPoint::new(2.0, 3.0)];
        let mesh = build_ribbon(&points, &grid, 2.0, PATH_STYLE).unwrap();

        // Default perpendicular (0, 1) offsets along z.
        assert_relative_eq!(
            (mesh.buffer.positions[0][2] - mesh.buffer.positions[1][2]).abs(),
            2.0,
            epsilon = 1e-6
        );
    }
}
