//! Course scene assembly.
//!
//! Turns the published resources into one ownership tree of geometry nodes:
//! a single course root entity with every layer and marker as a child,
//! rebuilt wholesale on each refresh and handed to the renderer.

/// Feature layering policy and scene construction in fixed draw order.
pub mod course_builder;

/// Composite point-feature entities built from primitive meshes.
pub mod markers;

/// Inverted sky dome behind every course layer.
pub mod sky;
