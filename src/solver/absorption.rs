//! Black hole growth
//!
//! Particles that end a frame inside a well are swallowed by it. The
//! well keeps the mass and grows; the particle leaves the world.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::core::{BodyId, BodySet, WorldState};
use crate::math::Real;

/// One particle swallowed by one well.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Absorption {
    pub particle: BodyId,
    pub well: BodyId,
    pub mass: Real,
    pub well_mass: Real,
    pub well_radius: Real,
}

/// Absorptions performed during the last fixed step, plus a running count.
#[derive(Resource, Default)]
pub struct AbsorptionLog {
    pub events: Vec<Absorption>,
    pub total: usize,
}

/// Merge particles into the first well (in list order) whose radius they
/// are strictly inside, then drop them from the set in one pass.
///
/// Wells grow as they absorb, so later particles are tested against the
/// grown radius.
pub fn absorb_particles(bodies: &mut BodySet) -> Vec<Absorption> {
    let wells: Vec<usize> = (0..bodies.len())
        .filter(|&index| {
            bodies
                .get_index(index)
                .is_some_and(|(_, body)| body.is_well())
        })
        .collect();

    let mut events = Vec::new();
    let mut removed = HashSet::new();

    for index in 0..bodies.len() {
        let Some((particle, body)) = bodies.get_index(index) else {
            continue;
        };
        if !body.is_particle() {
            continue;
        }
        let (position, mass) = (body.position, body.mass);

        for &well_index in &wells {
            let Some((well, well_body)) = bodies.get_index_mut(well_index) else {
                continue;
            };
            if !well_body.contains(position) {
                continue;
            }

            well_body.absorb(mass);
            events.push(Absorption {
                particle,
                well,
                mass,
                well_mass: well_body.mass,
                well_radius: well_body.radius,
            });
            removed.insert(particle);
            break;
        }
    }

    bodies.remove_all(&removed);
    events
}

/// Absorption stage.
pub fn absorption_update(mut state: ResMut<WorldState>, mut log: ResMut<AbsorptionLog>) {
    log.events = absorb_particles(state.bodies_mut());
    log.total += log.events.len();

    for event in &log.events {
        info!(
            "well {:?} absorbed particle {:?} (+{:.1}): mass={:.1} radius={}",
            event.well, event.particle, event.mass, event.well_mass, event.well_radius
        );
    }
}
