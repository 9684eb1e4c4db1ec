//! Feature layering policy: per-category geometry parameters, styles, and
//! draw order.
//!
//! Categories render in a fixed order — sky, background, terrain, then the
//! overlay layers — so translucent water and ribbon surfaces blend over the
//! opaque geometry beneath them. `spawn_course` in the scene module walks the
//! categories in exactly this order; heights and widths here are world units
//! (one elevation grid cell = one unit).

use bevy::prelude::*;

use crate::engine::geometry::mesh_buffer::SurfaceStyle;

const fn style(red: f32, green: f32, blue: f32, alpha: f32, roughness: f32, metallic: f32) -> SurfaceStyle {
    SurfaceStyle {
        colour: Color::Srgba(Srgba {
            red,
            green,
            blue,
            alpha,
        }),
        roughness,
        metallic,
    }
}

/// Inverted sky dome, drawn first behind everything.
pub const SKY_COLOUR: Color = Color::Srgba(Srgba {
    red: 0.53,
    green: 0.81,
    blue: 0.92,
    alpha: 1.0,
});
pub const SKY_RADIUS: f32 = 500.0;

/// Matte grass for the base terrain mesh. An artistic default, not derived
/// from the data.
pub const TERRAIN_STYLE: SurfaceStyle = style(0.34, 0.52, 0.25, 1.0, 0.95, 0.0);

/// Background terrain regions sit just above the ground mesh; the colour is
/// selected by the shape's description code.
pub const BACKGROUND_HEIGHT: f32 = 0.01;

pub fn background_style(description_code: i32) -> SurfaceStyle {
    match description_code {
        0 => style(0.85, 0.85, 0.75, 1.0, 0.8, 0.0),
        1 => style(0.2, 0.4, 0.2, 1.0, 0.8, 0.0),
        2 => style(0.6, 0.6, 0.5, 1.0, 0.8, 0.0),
        // Unrecognised codes render as generic scrub rather than vanishing.
        _ => style(0.5, 0.6, 0.4, 1.0, 0.8, 0.0),
    }
}

/// Translucent reflective water slabs.
pub const WATER_HEIGHT: f32 = 0.05;
pub const WATER_STYLE: SurfaceStyle = style(0.15, 0.45, 0.75, 0.8, 0.1, 0.3);

/// Creeks are wide translucent ribbons rather than closed polygons.
pub const CREEK_WIDTH: f32 = 3.0;
pub const CREEK_STYLE: SurfaceStyle = style(0.3, 0.6, 0.9, 0.8, 0.7, 0.0);

/// Hole perimeter outline.
pub const PERIMETER_WIDTH: f32 = 1.0;
pub const PERIMETER_STYLE: SurfaceStyle = style(0.3, 0.3, 0.3, 1.0, 0.7, 0.0);

/// Fairways: lighter vibrant green.
pub const FAIRWAY_HEIGHT: f32 = 0.05;
pub const FAIRWAY_STYLE: SurfaceStyle = style(0.45, 0.68, 0.35, 1.0, 0.8, 0.0);

/// Greens: darker, richer green, slightly above the fairway layer.
pub const GREEN_HEIGHT: f32 = 0.08;
pub const GREEN_STYLE: SurfaceStyle = style(0.25, 0.55, 0.25, 1.0, 0.8, 0.0);

/// Teeboxes: sandy tan at green height.
pub const TEEBOX_HEIGHT: f32 = 0.08;
pub const TEEBOX_STYLE: SurfaceStyle = style(0.8, 0.7, 0.5, 1.0, 0.8, 0.0);

/// Tee-to-green centre line, translucent yellow.
pub const CENTRAL_PATH_WIDTH: f32 = 0.5;
pub const CENTRAL_PATH_STYLE: SurfaceStyle = style(1.0, 1.0, 0.0, 0.6, 0.7, 0.0);

/// Walking paths.
pub const PATH_WIDTH: f32 = 2.0;
pub const PATH_STYLE: SurfaceStyle = style(0.5, 0.5, 0.5, 1.0, 0.7, 0.0);

/// Bridges render as raised polygon decks.
pub const BRIDGE_HEIGHT: f32 = 2.5;
pub const BRIDGE_STYLE: SurfaceStyle = style(0.6, 0.4, 0.2, 1.0, 0.8, 0.0);

/// Clubhouse footprint extruded well above the terrain.
pub const CLUBHOUSE_HEIGHT: f32 = 5.0;
pub const CLUBHOUSE_STYLE: SurfaceStyle = style(0.7, 0.6, 0.5, 1.0, 0.8, 0.0);

/// Tree primitives: trunk and canopy scale with the shape's size class.
pub const TREE_TRUNK_RADIUS: f32 = 0.2;
pub const TREE_BASE_SCALE: f32 = 1.0;
pub const TREE_SIZE_SCALE: f32 = 0.3;
pub const TREE_TRUNK_STYLE: SurfaceStyle = style(0.4, 0.3, 0.2, 1.0, 0.8, 0.0);
pub const TREE_CANOPY_STYLE: SurfaceStyle = style(0.1, 0.5, 0.1, 1.0, 0.8, 0.0);

/// Green-centre and teebox-centre sphere markers.
pub const GREEN_CENTER_RADIUS: f32 = 0.5;
pub const GREEN_CENTER_STYLE: SurfaceStyle = style(1.0, 0.0, 0.0, 1.0, 0.8, 0.0);
pub const TEEBOX_CENTER_RADIUS: f32 = 0.4;
pub const TEEBOX_CENTER_STYLE: SurfaceStyle = style(0.0, 0.0, 1.0, 1.0, 0.8, 0.0);

/// Hole flag: white pole with a red flag cuboid near the top.
pub const FLAG_POLE_HEIGHT: f32 = 5.0;
pub const FLAG_POLE_RADIUS: f32 = 0.1;
pub const FLAG_POLE_STYLE: SurfaceStyle = style(1.0, 1.0, 1.0, 1.0, 0.8, 0.0);
pub const FLAG_SIZE: Vec3 = Vec3::new(1.5, 1.0, 0.1);
pub const FLAG_OFFSET: Vec3 = Vec3::new(0.75, 4.5, 0.0);
pub const FLAG_STYLE: SurfaceStyle = style(1.0, 0.2, 0.2, 1.0, 0.8, 0.0);
