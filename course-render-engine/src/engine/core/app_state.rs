use bevy::prelude::*;

/// Application lifecycle: resources load once, then the scene either builds
/// or the failure reason is shown. There is no way back from `Failed` short
/// of restarting the viewer.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Human-readable reason the course could not be loaded.
#[derive(Resource, Debug, Clone)]
pub struct LoadError {
    pub message: String,
}

#[derive(Component)]
pub struct LoadErrorText;

/// Show the load failure full-screen. Only resource-level failures reach
/// here; per-shape problems degrade to fewer rendered features instead.
pub fn show_load_error_screen(mut commands: Commands, error: Option<Res<LoadError>>) {
    let message = error
        .map(|error| error.message.clone())
        .unwrap_or_else(|| "Course resources failed to load".to_owned());

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(message),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.35, 0.35)),
                LoadErrorText,
            ));
        });
}
