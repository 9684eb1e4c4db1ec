use bevy::prelude::*;
use bevy::window::PresentMode;

/// Window settings for the native viewer.
pub fn create_window_config() -> Window {
    Window {
        title: "Course Terrain Viewer".into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
