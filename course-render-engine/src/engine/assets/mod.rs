//! Course resource data models.
//!
//! Serde mirrors of the two JSON resources a course ships with: the elevation
//! grid and the vector feature overlay. Both are registered as Bevy assets,
//! loaded once, and published as read-only resources for the scene build.

/// Elevation grid matrix with geographic anchoring and load-time validation.
pub mod elevation;

/// Feature overlay categories, nested hole components, and guarded accessors.
pub mod vector_overlay;
