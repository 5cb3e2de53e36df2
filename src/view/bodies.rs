use std::collections::HashSet;

use bevy::prelude::*;

use crate::core::{Body, BodyId, WorldState};

use super::sim_to_world;

const WELL_Z: f32 = 1.0;
const PARTICLE_Z: f32 = 2.0;

/// Links a circle mesh entity to the body it draws.
#[derive(Component)]
pub struct BodyVisual {
    pub id: BodyId,
}

fn body_transform(body: &Body, domain: Vec2) -> Transform {
    let z = if body.is_well() { WELL_Z } else { PARTICLE_Z };
    Transform::from_translation(sim_to_world(body.position, domain).extend(z))
        .with_scale(Vec3::new(body.radius, body.radius, 1.0))
}

/// Keep one unit-circle entity per body: move and rescale existing ones,
/// despawn those whose body is gone, spawn those that are missing.
pub fn sync_body_visuals(
    mut commands: Commands,
    state: Res<WorldState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut circle: Local<Option<Handle<Mesh>>>,
    mut visuals: Query<(Entity, &BodyVisual, &mut Transform)>,
) {
    let bodies = state.bodies();
    let domain = state.params().domain();
    let mut drawn = HashSet::with_capacity(bodies.len());

    for (entity, visual, mut transform) in visuals.iter_mut() {
        match bodies.get(visual.id) {
            Some(body) => {
                *transform = body_transform(body, domain);
                drawn.insert(visual.id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    let circle = circle
        .get_or_insert_with(|| meshes.add(Circle::new(1.0)))
        .clone();

    for (id, body) in bodies.iter().filter(|(id, _)| !drawn.contains(id)) {
        commands.spawn((
            BodyVisual { id },
            Mesh2d(circle.clone()),
            MeshMaterial2d(materials.add(body.color)),
            body_transform(body, domain),
        ));
    }
}
