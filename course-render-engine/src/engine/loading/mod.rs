//! Course resource loading pipeline.
//!
//! Decoding happens off the main schedule inside the asset server; once both
//! JSON resources are available they are published atomically as read-only
//! resources and the app transitions out of the loading state. There is no
//! retry or partial-success path.

/// Loading milestone flag keeping the publish one-shot.
pub mod progress;

/// Handle tracking, atomic publish, and load-failure surfacing.
pub mod resource_loader;
