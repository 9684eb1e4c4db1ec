use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::assets::vector_overlay::VectorOverlay;
use crate::engine::core::app_state::{AppState, LoadError};
use crate::engine::loading::progress::LoadingProgress;

const ELEVATION_PATH: &str = "courses/demo.elevation.json";
const OVERLAY_PATH: &str = "courses/demo.overlay.json";

/// Holds the in-flight handles for the two course resources.
#[derive(Resource, Default)]
pub struct ResourceLoader {
    elevation: Option<Handle<ElevationGrid>>,
    overlay: Option<Handle<VectorOverlay>>,
}

/// Kick off the background load of both course resources.
pub fn start_loading(mut loader: ResMut<ResourceLoader>, asset_server: Res<AssetServer>) {
    info!("Loading course resources: {ELEVATION_PATH}, {OVERLAY_PATH}");
    loader.elevation = Some(asset_server.load(ELEVATION_PATH));
    loader.overlay = Some(asset_server.load(OVERLAY_PATH));
}

/// Publish both resources atomically once decoding finishes.
///
/// Nothing downstream may observe one resource without the other, so this
/// waits until both assets are present, validates the elevation matrix, and
/// only then inserts the read-only copies and transitions to `Ready`. A
/// validation failure is fatal to scene construction and surfaces the reason
/// to the user instead.
pub fn publish_resources_when_ready(
    mut progress: ResMut<LoadingProgress>,
    loader: Res<ResourceLoader>,
    grids: Res<Assets<ElevationGrid>>,
    overlays: Res<Assets<VectorOverlay>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.resources_published {
        return;
    }

    let (Some(elevation_handle), Some(overlay_handle)) = (&loader.elevation, &loader.overlay)
    else {
        return;
    };
    let (Some(grid), Some(overlay)) = (grids.get(elevation_handle), overlays.get(overlay_handle))
    else {
        return;
    };

    if let Err(reason) = grid.validate() {
        fail_loading(
            &mut commands,
            &mut next_state,
            format!("Elevation resource rejected: {reason}"),
        );
        progress.resources_published = true;
        return;
    }

    println!(
        "✓ Course resources loaded ({}x{} grid, {} hole(s))",
        grid.lat_points,
        grid.long_points,
        overlay.holes().len()
    );

    commands.insert_resource(grid.clone());
    commands.insert_resource(overlay.clone());
    progress.resources_published = true;
    next_state.set(AppState::Ready);
}

/// Map asset I/O or decode failures to the failed state with a readable
/// message. No partial terrain is ever built.
pub fn watch_load_failures(
    mut elevation_failures: EventReader<AssetLoadFailedEvent<ElevationGrid>>,
    mut overlay_failures: EventReader<AssetLoadFailedEvent<VectorOverlay>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(failure) = elevation_failures.read().next() {
        fail_loading(
            &mut commands,
            &mut next_state,
            format!("Failed to load {}: {}", failure.path, failure.error),
        );
        return;
    }

    if let Some(failure) = overlay_failures.read().next() {
        fail_loading(
            &mut commands,
            &mut next_state,
            format!("Failed to load {}: {}", failure.path, failure.error),
        );
    }
}

fn fail_loading(commands: &mut Commands, next_state: &mut NextState<AppState>, message: String) {
    error!("{message}");
    commands.insert_resource(LoadError { message });
    next_state.set(AppState::Failed);
}
