use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::elevation::ElevationGrid;
use crate::engine::assets::vector_overlay::VectorOverlay;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, show_load_error_screen};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::resource_loader::{
    ResourceLoader, publish_resources_when_ready, start_loading, watch_load_failures,
};
use crate::engine::scene::course_builder::spawn_course_scene;

use crate::constants::render_settings::{AMBIENT_BRIGHTNESS, SUN_ILLUMINANCE};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers the two course resource types as loadable JSON assets.
        // Distinct double extensions keep both on the same loader stack.
        .add_plugins(JsonAssetPlugin::<ElevationGrid>::new(&["elevation.json"]))
        .add_plugins(JsonAssetPlugin::<VectorOverlay>::new(&["overlay.json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ResourceLoader>()
        .insert_resource(AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (publish_resources_when_ready, watch_load_failures)
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Ready), spawn_course_scene)
        .add_systems(OnEnter(AppState::Failed), show_load_error_screen)
        .add_systems(Update, camera_controller.run_if(in_state(AppState::Ready)));

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_orbit_camera(commands: &mut Commands) {
    let orbit = OrbitCamera::default();
    commands.spawn((Camera3d::default(), orbit.transform()));
    commands.insert_resource(orbit);
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_orbit_camera(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
