/// Shared tuning tables for the viewer.

/// Per-category style parameters and draw-order policy for course features.
pub mod feature_styles;

/// Camera and lighting settings for the viewport.
pub mod render_settings;
