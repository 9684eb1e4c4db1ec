//! Terrain and feature mesh synthesis.
//!
//! Pure builders that turn the elevation grid and overlay shapes into
//! triangle geometry; no scene or renderer state is touched here, so every
//! builder is unit-testable in isolation and deterministic for identical
//! inputs.

/// Geographic-to-grid coordinate mapping and elevation sampling.
///
/// The shared primitive behind every mesh builder and marker placement.
pub mod grid_mapper;

/// Single anchored transform computation for point features.
pub mod marker;

/// Raw mesh buffers, surface styles, and conversion into renderer meshes.
pub mod mesh_buffer;

/// Smoothed per-vertex normal estimation from a triangle list.
pub mod normals;

/// Tolerant decoding of the delimited overlay point encoding.
pub mod point_string;

/// Fan triangulation of closed contours into thin elevated slabs.
pub mod polygon;

/// Constant-width strips along polylines for path-like features.
pub mod ribbon;

/// Base ground mesh generation from the elevation grid.
pub mod terrain_mesh;
