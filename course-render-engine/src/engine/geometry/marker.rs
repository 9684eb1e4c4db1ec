use bevy::prelude::*;

use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::geometry::grid_mapper::sample_world_position;
use crate::engine::geometry::point_string::GeoPoint;

/// Compute the anchored world-space transform origin for a point feature.
///
/// The anchor sits on the terrain surface at the point's cell, lifted by
/// `height_offset`, recentred like every other layer. Points outside the grid
/// reject the whole feature instance — composite markers (trees, flags) are
/// assembled by the caller around this anchor, so there is nothing sensible
/// to place when the anchor itself is missing.
pub fn place_marker(
    point: GeoPoint,
    grid: &ElevationGrid,
    height_offset: f32,
) -> Option<Vec3> {
    sample_world_position(point, grid, height_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn anchor_is_centred_on_the_grid() {
        let grid = ElevationGrid::flat(6, 6, 4.0);
        let anchor = place_marker(GeoPoint::new(2.0, 5.0), &grid, 0.5).unwrap();

        assert_relative_eq!(anchor.x, 2.0 - 3.0);
        assert_relative_eq!(anchor.y, 4.0 * 0.1 + 0.5, epsilon = 1e-6);
        assert_relative_eq!(anchor.z, 1.0 - 3.0);
    }

    #[test]
    fn out_of_grid_anchor_rejects_the_feature() {
        let grid = ElevationGrid::flat(6, 6, 0.0);
        assert!(place_marker(GeoPoint::new(-1.0, 5.0), &grid, 0.0).is_none());
        assert!(place_marker(GeoPoint::new(2.0, 50.0), &grid, 0.0).is_none());
    }

    #[test]
    fn placement_is_deterministic() {
        let grid = ElevationGrid::flat(6, 6, 2.5);
        let point = GeoPoint::new(1.25, 4.75);
        assert_eq!(
            place_marker(point, &grid, 0.4),
            place_marker(point, &grid, 0.4)
        );
    }
}
