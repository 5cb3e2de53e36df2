use std::time::Duration;

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod math;
pub mod solver;
pub mod view;

// Public re-exports for clean API
pub use crate::config::{FPS, SimParams};
pub use crate::core::{Body, BodyId, BodyKind, BodySet, WorldState};
pub use crate::solver::{Absorption, AbsorptionLog, FieldArrow};

use crate::core::log_world_summary;
use crate::solver::{absorption_update, force_update, integrate_update};

/// Physics of the sandbox: world creation and the fixed-rate step.
///
/// Uses the [`SimParams`] resource when one is already present, otherwise
/// the defaults.
pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        let params = app
            .world()
            .get_resource::<SimParams>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(WorldState::new(params));
        app.insert_resource(AbsorptionLog::default());
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f64(
            1.0 / FPS,
        )));
        app.add_systems(Startup, populate_world);
        app.add_systems(
            FixedUpdate,
            (
                force_update,
                integrate_update,
                absorption_update,
                log_world_summary,
            )
                .chain(),
        );
    }
}

fn populate_world(mut state: ResMut<WorldState>) {
    state.populate(&mut rand::rng());
    info!(
        "world created: {} bodies ({} black holes), total mass {:.1}",
        state.body_count(),
        state.bodies().wells().count(),
        state.total_mass()
    );
}
