//! Application assembly and lifecycle.
//!
//! Window creation, plugin wiring, state registration and the failure
//! screen live here. Everything else in the engine is scheduled from
//! `app_setup`.

/// Bevy app construction and system scheduling.
pub mod app_setup;

/// Loading / ready / failed state machine and the failure overlay.
pub mod app_state;

/// Primary window configuration.
pub mod window_config;
