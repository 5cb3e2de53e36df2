use bevy::prelude::*;

use crate::config::FIELD_COLOR;
use crate::core::WorldState;
use crate::solver::sample_field;

use super::sim_to_world;

pub fn draw_vector_field(mut gizmos: Gizmos, state: Res<WorldState>) {
    let domain = state.params().domain();
    for arrow in sample_field(state.bodies(), state.params()) {
        gizmos.line_2d(
            sim_to_world(arrow.origin, domain),
            sim_to_world(arrow.tip, domain),
            FIELD_COLOR,
        );
    }
}
