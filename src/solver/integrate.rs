use bevy::prelude::*;

use crate::config::SimParams;
use crate::core::{BodySet, WorldState};
use crate::math::{Real, wrap_toroidal};

/// Velocity/position update, speed clamp, force reset and toroidal wrap.
pub fn integrate_bodies(bodies: &mut BodySet, params: &SimParams, dt: Real) {
    for body in bodies.bodies_mut() {
        body.integrate(dt, params.max_speed);
        body.position = wrap_toroidal(body.position, params.width, params.height);
    }
}

/// Integration stage.
pub fn integrate_update(time: Res<Time>, mut state: ResMut<WorldState>) {
    let dt = time.delta_secs();
    let (bodies, params) = state.bodies_mut_and_params();
    integrate_bodies(bodies, params, dt);
}
