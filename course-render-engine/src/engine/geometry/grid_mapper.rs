use bevy::prelude::*;

use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::geometry::point_string::GeoPoint;

/// Uniform vertical scale applied to every sampled elevation value across the
/// whole pipeline, terrain and overlay features alike.
pub const ELEVATION_SCALE: f32 = 0.1;

/// Fractional position of a geographic point inside the elevation grid.
///
/// `lon_index` grows eastwards along columns, `lat_index` grows southwards
/// along rows. Derived per point and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub lon_index: f64,
    pub lat_index: f64,
}

impl GridCell {
    /// Whether the cell falls inside the grid.
    ///
    /// Points outside the grid must be rejected rather than clamped,
    /// otherwise their geometry would visually wrap to the grid edge. The
    /// explicit negative checks matter: a slightly-negative fractional index
    /// would otherwise truncate to row/column 0 and pass as valid.
    pub fn is_valid(&self, grid: &ElevationGrid) -> bool {
        self.lat_index >= 0.0
            && self.lon_index >= 0.0
            && (self.lat_index as i32) < grid.lat_points
            && (self.lon_index as i32) < grid.long_points
    }

    /// Horizontal world-space placement of the cell, before recentering.
    /// One grid cell maps to one world unit on each axis.
    pub fn world_xz(&self) -> (f32, f32) {
        (self.lon_index as f32, self.lat_index as f32)
    }
}

/// Map a geographic point to its fractional grid cell.
pub fn map_to_cell(point: GeoPoint, grid: &ElevationGrid) -> GridCell {
    GridCell {
        lon_index: (point.longitude - grid.min_longitude) / grid.step,
        lat_index: (grid.max_latitude - point.latitude) / grid.step,
    }
}

/// Sample the raw elevation under a cell, or `None` when the cell is outside
/// the grid.
///
/// Sampling truncates to the nearest lower index with no interpolation
/// between cells. A known approximation: at the cell scale of course data the
/// error is below visual relevance, and it keeps every builder on one cheap
/// shared lookup.
pub fn sample_elevation(cell: &GridCell, grid: &ElevationGrid) -> Option<f64> {
    if !cell.is_valid(grid) {
        return None;
    }
    Some(grid.elevation_array[cell.lat_index as usize][cell.lon_index as usize])
}

/// Translation that moves the grid's centre to the world origin. Subtracted
/// from every generated vertex or anchor so all layers align exactly.
pub fn recenter_offset(grid: &ElevationGrid) -> (f32, f32) {
    (
        grid.long_points as f32 / 2.0,
        grid.lat_points as f32 / 2.0,
    )
}

/// Map a point to a centred world-space position on the terrain surface,
/// lifted by `height_offset`. `None` when the point is outside the grid.
///
/// This is the shared primitive behind every overlay builder: polygons,
/// ribbons, and markers all resolve their vertices and anchors through it.
pub fn sample_world_position(
    point: GeoPoint,
    grid: &ElevationGrid,
    height_offset: f32,
) -> Option<Vec3> {
    let cell = map_to_cell(point, grid);
    let elevation = sample_elevation(&cell, grid)?;
    let (x, z) = cell.world_xz();
    let (center_x, center_z) = recenter_offset(grid);

    Some(Vec3::new(
        x - center_x,
        elevation as f32 * ELEVATION_SCALE + height_offset,
        z - center_z,
    ))
}
