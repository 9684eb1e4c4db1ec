use bevy::prelude::*;

/// Loading milestone for the course resources. The load resolves exactly
/// once: either both resources publish together or the failure state is
/// entered with a message. The publish system consumes this flag to keep
/// the resolution one-shot.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub resources_published: bool,
}
