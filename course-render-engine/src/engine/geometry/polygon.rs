use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::geometry::grid_mapper::sample_world_position;
use crate::engine::geometry::mesh_buffer::{MeshBuffer, StyledMesh, SurfaceStyle};
use crate::engine::geometry::point_string::GeoPoint;

/// Fan-triangulate a closed contour into a thin slab floating `height_offset`
/// above the terrain surface.
///
/// Points outside the elevation grid are dropped individually; the shape
/// shrinks rather than wrapping to the grid edge. Fewer than three surviving
/// points cannot form a triangle, so the builder reports no mesh and the
/// caller omits the feature. The fan from vertex 0 is only geometrically
/// correct for convex-ish, non-self-intersecting contours; course polygons
/// (fairways, greens, bunkers) are close enough in practice that concave
/// overlap artefacts have not warranted a full ear-clipping triangulator.
/// Normals are left empty — these slabs flat-shade with the constant up
/// vector supplied at mesh conversion.
pub fn build_polygon(
    points: &[GeoPoint],
    grid: &ElevationGrid,
    height_offset: f32,
    style: SurfaceStyle,
) -> Option<StyledMesh> {
    if points.len() < 3 {
        return None;
    }

    let positions: Vec<[f32; 3]> = points
        .iter()
        .filter_map(|&point| sample_world_position(point, grid, height_offset))
        .map(|position| position.to_array())
        .collect();

    if positions.len() < 3 {
        return None;
    }

    let mut indices = Vec::with_capacity((positions.len() - 2) * 3);
    for i in 1..positions.len() as u32 - 1 {
        indices.extend_from_slice(&[0, i, i + 1]);
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
    use crate::constants::feature_styles::FAIRWAY_STYLE;

    fn triangle_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.5, 3.5),
            GeoPoint::new(2.5, 3.5),
            GeoPoint::new(1.5, 1.5),
        ]
    }

    #[test]
    fn three_valid_points_make_one_triangle() {
        let grid = ElevationGrid::flat(4, 4, 0.0);
        let mesh = build_polygon(&triangle_points(), &grid, 0.05, FAIRWAY_STYLE).unwrap();

        assert_eq!(mesh.buffer.positions.len(), 3);
        assert_eq!(mesh.buffer.triangle_count(), 1);
        assert_eq!(mesh.buffer.indices, vec![0, 1, 2]);
        assert!(mesh.buffer.normals.is_empty());
    }

    #[test]
    fn fan_triangulation_pivots_on_vertex_zero() {
        let grid = ElevationGrid::flat(8, 8, 0.0);
        let points = vec![
            GeoPoint::new(1.0, 7.0),
            GeoPoint::new(5.0, 7.0),
            GeoPoint::new(6.0, 4.0),
            GeoPoint::new(4.0, 1.5),
            GeoPoint::new(1.5, 2.0),
        ];
        let mesh = build_polygon(&points, &grid, 0.0, FAIRWAY_STYLE).unwrap();

        assert_eq!(mesh.buffer.triangle_count(), 3);
        assert_eq!(mesh.buffer.indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn too_few_points_yield_no_mesh() {
        let grid = ElevationGrid::flat(4, 4, 0.0);
        let points = vec![GeoPoint::new(0.5, 3.5), GeoPoint::new(2.5, 3.5)];
        assert!(build_polygon(&points, &grid, 0.05, FAIRWAY_STYLE).is_none());
        assert!(build_polygon(&[], &grid, 0.05, FAIRWAY_STYLE).is_none());
    }

    #[test]
    fn out_of_grid_points_are_dropped_individually() {
        let grid = ElevationGrid::flat(4, 4, 0.0);
        let mut points = triangle_points();
        points.push(GeoPoint::new(-2.0, 3.5)); // west of the grid

        let mesh = build_polygon(&points, &grid, 0.05, FAIRWAY_STYLE).unwrap();
        assert_eq!(mesh.buffer.positions.len(), 3);
    }

    #[test]
    fn dropping_below_three_valid_points_fails_the_shape() {
        let grid = ElevationGrid::flat(4, 4, 0.0);
        let points = vec![
            GeoPoint::new(0.5, 3.5),
            GeoPoint::new(2.5, 3.5),
            GeoPoint::new(9.0, 9.0), // outside
        ];
        assert!(build_polygon(&points, &grid, 0.05, FAIRWAY_STYLE).is_none());
    }

    #[test]
    fn vertices_float_at_the_height_offset() {
        let grid = ElevationGrid::flat(4, 4, 2.0);
        let mesh = build_polygon(&triangle_points(), &grid, 0.08, FAIRWAY_STYLE).unwrap();

        for position in &mesh.buffer.positions {
            assert!((position[1] - (2.0 * 0.1 + 0.08)).abs() < 1e-6);
        }
    }
}
