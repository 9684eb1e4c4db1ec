use crate::constants::feature_styles::TERRAIN_STYLE;
use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::geometry::grid_mapper::ELEVATION_SCALE;
use crate::engine::geometry::mesh_buffer::{MeshBuffer, StyledMesh};
use crate::engine::geometry::normals::estimate_normals;

/// Texture tiling factor across the full terrain extent on each axis.
const UV_TILING: f32 = 10.0;

/// Build the base ground mesh for an elevation grid.
///
/// One vertex per grid cell, visited row-major (latitude outer, longitude
/// inner) so vertex `index = lat * long_points + lon`. Triangulation and uv
/// generation both depend on that ordering, so it must not change. Each
/// interior quad emits the triangles `(top_left, bottom_left, top_right)` and
/// `(top_right, bottom_left, bottom_right)` — this winding keeps the smoothed
/// normals facing up. The caller recentres the result by translating it with
/// `-recenter_offset(grid)` in x/z.
pub fn build_terrain_mesh(grid: &ElevationGrid) -> StyledMesh {
    let lat_points = grid.lat_points as usize;
    let long_points = grid.long_points as usize;

    let mut positions = Vec::with_capacity(lat_points * long_points);
    let mut uvs = Vec::with_capacity(lat_points * long_points);

    for lat in 0..lat_points {
        for lon in 0..long_points {
            let height = grid.elevation_array[lat][lon] as f32 * ELEVATION_SCALE;
            positions.push([lon as f32, height, lat as f32]);

            uvs.push([
                lon as f32 / long_points as f32 * UV_TILING,
                lat as f32 / lat_points as f32 * UV_TILING,
            ]);
        }
    }

    let mut indices = Vec::with_capacity(lat_points.saturating_sub(1) * long_points.saturating_sub(1) * 6);
    for lat in 0..lat_points.saturating_sub(1) {
        for lon in 0..long_points.saturating_sub(1) {
            let top_left = (lat * long_points + lon) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((lat + 1) * long_points + lon) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    let normals = estimate_normals(&positions, &indices);

    StyledMesh {
        buffer: MeshBuffer {
            positions,
            normals,
            uvs,
            indices,
        },
        style: TERRAIN_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_by_two_grid_produces_one_quad() {
        let mesh = build_terrain_mesh(&ElevationGrid::flat(2, 2, 0.0));

        assert_eq!(mesh.buffer.positions.len(), 4);
        assert_eq!(mesh.buffer.triangle_count(), 2);
        assert!(mesh.buffer.indices.iter().all(|&index| index < 4));
        assert_eq!(mesh.buffer.indices, vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn vertices_are_row_major_with_scaled_heights() {
        let grid = ElevationGrid::with_heights(vec![
            vec![0.0, 1.0, 2.0],
            vec![3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0],
        ]);
        let mesh = build_terrain_mesh(&grid);

        // Vertex index = lat * long_points + lon.
        let vertex = mesh.buffer.positions[1 * 3 + 2];
        assert_relative_eq!(vertex[0], 2.0);
        assert_relative_eq!(vertex[1], 5.0 * 0.1, epsilon = 1e-6);
        assert_relative_eq!(vertex[2], 1.0);
    }

    #[test]
    fn uvs_tile_ten_times_across_the_grid() {
        let mesh = build_terrain_mesh(&ElevationGrid::flat(5, 4, 0.0));

        let uv = mesh.buffer.uvs[2 * 4 + 3];
        assert_relative_eq!(uv[0], 3.0 / 4.0 * 10.0);
        assert_relative_eq!(uv[1], 2.0 / 5.0 * 10.0);
    }

    #[test]
    fn flat_terrain_normals_face_up() {
        let mesh = build_terrain_mesh(&ElevationGrid::flat(4, 4, 3.0));

        for normal in &mesh.buffer.normals {
            assert_relative_eq!(normal[1], 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn rebuilding_is_bit_identical() {
        let grid = ElevationGrid::with_heights(vec![
            vec![1.5, -0.25, 3.0],
            vec![0.0, 2.75, 1.0],
            vec![4.0, 0.5, -1.5],
        ]);

        let first = build_terrain_mesh(&grid);
        let second = build_terrain_mesh(&grid);
        assert_eq!(first.buffer, second.buffer);
    }
}
