use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::config::{PARTICLE_MASS_RANGE, PARTICLE_SPEED_RANGE, SimParams, WELL_LAYOUT};
use crate::math::{Point, Real, Vector, from_polar};
use crate::solver::{Absorption, absorb_particles, accumulate_forces, integrate_bodies};

use super::body::{Body, BodyId};
use super::body_set::BodySet;

/// Aggregate simulation state: the body arena plus the parameters it runs with.
#[derive(Resource)]
pub struct WorldState {
    bodies: BodySet,
    params: SimParams,
}

impl WorldState {
    pub fn new(params: SimParams) -> Self {
        Self {
            bodies: BodySet::new(),
            params,
        }
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut BodySet {
        &mut self.bodies
    }

    pub fn bodies_mut_and_params(&mut self) -> (&mut BodySet, &SimParams) {
        (&mut self.bodies, &self.params)
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> Real {
        self.bodies.total_mass()
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        self.bodies.insert(body)
    }

    /// Replace the world with the two wells followed by
    /// `params.initial_particles` random particles.
    pub fn populate<R: Rng>(&mut self, rng: &mut R) {
        self.bodies.clear();
        let domain = self.params.domain();

        for (fraction, mass, radius) in WELL_LAYOUT {
            self.bodies.insert(Body::well(fraction * domain, mass, radius));
        }

        for _ in 0..self.params.initial_particles {
            let position = Point::new(
                rng.random_range(0.0..domain.x),
                rng.random_range(0.0..domain.y),
            );
            let velocity = random_velocity(rng);
            let mass = rng.random_range(PARTICLE_MASS_RANGE.0..PARTICLE_MASS_RANGE.1);
            self.bodies.insert(Body::particle(position, velocity, mass));
        }
    }

    /// Inject a click particle at `position` with a small random velocity.
    pub fn spawn_particle_at<R: Rng>(&mut self, position: Point, rng: &mut R) -> BodyId {
        let velocity = random_velocity(rng);
        self.bodies.insert(Body::click_particle(position, velocity))
    }

    /// One full physics frame: forces, integration, absorption.
    pub fn step(&mut self, dt: Real) -> Vec<Absorption> {
        accumulate_forces(&mut self.bodies, &self.params);
        integrate_bodies(&mut self.bodies, &self.params, dt);
        absorb_particles(&mut self.bodies)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(SimParams::default())
    }
}

fn random_velocity<R: Rng>(rng: &mut R) -> Vector {
    let angle = rng.random_range(0.0..TAU);
    let speed = rng.random_range(PARTICLE_SPEED_RANGE.0..PARTICLE_SPEED_RANGE.1);
    from_polar(angle, speed)
}

pub fn log_world_summary(state: Res<WorldState>, mut frame: Local<u32>) {
    const SAMPLE_PERIOD: u32 = 120;

    if *frame % SAMPLE_PERIOD == 0 {
        let wells: Vec<String> = state
            .bodies()
            .wells()
            .map(|(id, well)| format!("{:?}: m={:.0} r={}", id, well.mass, well.radius))
            .collect();
        debug!(
            "[frame {:05}] bodies={} particles={} total_mass={:.1} | {}",
            *frame,
            state.body_count(),
            state.bodies().particle_count(),
            state.total_mass(),
            wells.join(" | ")
        );
    }

    *frame = frame.wrapping_add(1);
}
