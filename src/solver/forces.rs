//! Pairwise gravity
//!
//! Every body pulls on every other body with the softened inverse-square
//! law. Wells act on each other too; that pull is never integrated.

use bevy::prelude::*;

use crate::config::SimParams;
use crate::core::{BodySet, WorldState};
use crate::math::{Point, Real, softened_pull};

/// O(n²) accumulation into each body's force accumulator.
pub fn accumulate_forces(bodies: &mut BodySet, params: &SimParams) {
    let sources: Vec<(Point, Real)> = bodies
        .bodies()
        .map(|body| (body.position, body.mass))
        .collect();

    for (i, body) in bodies.bodies_mut().enumerate() {
        for (j, &(position, mass)) in sources.iter().enumerate() {
            if i == j {
                continue;
            }
            body.force += softened_pull(
                body.position,
                position,
                mass,
                params.gravity_constant,
                params.softening,
            );
        }
    }
}

/// Force stage.
pub fn force_update(mut state: ResMut<WorldState>) {
    let (bodies, params) = state.bodies_mut_and_params();
    accumulate_forces(bodies, params);
}
