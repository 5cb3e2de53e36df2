use bevy::prelude::*;

use crate::core::WorldState;

use super::world_to_sim;

/// While the left button is held, inject one particle per fixed step at the cursor.
pub fn spawn_particles_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut state: ResMut<WorldState>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let position = world_to_sim(world_pos, state.params().domain());
    let id = state.spawn_particle_at(position, &mut rand::rng());
    debug!(
        "spawned particle {:?} at ({:.1}, {:.1})",
        id, position.x, position.y
    );
}
