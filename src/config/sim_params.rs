use bevy::prelude::*;

use super::constants;
use crate::math::Real;

/// Runtime parameters for the gravity sandbox
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Gravitational constant of the softened inverse-square law
    pub gravity_constant: Real,

    /// Added to the squared distance so coincident bodies stay finite
    pub softening: Real,

    /// Speed cap applied to free particles after each velocity update
    pub max_speed: Real,

    /// Width of the toroidal domain, in pixels
    pub width: Real,

    /// Height of the toroidal domain, in pixels
    pub height: Real,

    /// Number of random particles created with the world
    pub initial_particles: usize,

    /// Distance between vector field samples, in pixels
    pub field_spacing: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity_constant: constants::G,
            softening: constants::SOFTENING,
            max_speed: constants::MAX_SPEED,
            width: constants::WIDTH,
            height: constants::HEIGHT,
            initial_particles: constants::INITIAL_PARTICLES,
            field_spacing: constants::FIELD_SPACING,
        }
    }
}

impl SimParams {
    pub fn with_gravity_constant(mut self, g: Real) -> Self {
        self.gravity_constant = g;
        self
    }

    /// Negative softening would reintroduce the singularity, so it is clamped at zero.
    pub fn with_softening(mut self, softening: Real) -> Self {
        self.softening = softening.max(0.0);
        self
    }

    pub fn with_max_speed(mut self, max_speed: Real) -> Self {
        self.max_speed = max_speed.max(0.0);
        self
    }

    pub fn with_domain(mut self, width: Real, height: Real) -> Self {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self
    }

    pub fn with_initial_particles(mut self, count: usize) -> Self {
        self.initial_particles = count;
        self
    }

    pub fn with_field_spacing(mut self, spacing: u32) -> Self {
        self.field_spacing = spacing.max(1);
        self
    }

    pub fn domain(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
