//! Orbit camera for course scene navigation.

/// Orbit camera resource, clamped update methods, and the input controller.
pub mod orbit_camera;
