//! Bodies of the gravity sandbox
//!
//! Every body carries the same physical state; its [`BodyKind`] decides
//! whether it moves (particles) or sits still and grows (wells).

use bevy::prelude::Color;

use crate::config::{
    CLICK_PARTICLE_COLOR, CLICK_PARTICLE_MASS, CLICK_PARTICLE_RADIUS, PARTICLE_COLOR,
    WELL_COLOR, WELL_RADIUS_BASE, WELL_RADIUS_FLOOR, WELL_RADIUS_SQRT_SCALE,
};
use crate::math::{Point, Real, Vector, clamp_speed, zero_vector};

/// Stable handle of a body. Never reused within a [`super::BodySet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Immovable gravity well (black hole). Gains mass by absorbing particles.
    Well,
    /// Free particle. Moves under gravity and can be absorbed by a well.
    Particle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Point,
    pub velocity: Vector,
    pub force: Vector, // per unit mass, accumulated over the current frame
    pub mass: Real,
    pub radius: Real,
    pub color: Color,
    pub kind: BodyKind,
}

impl Body {
    pub fn well(position: Point, mass: Real, radius: Real) -> Self {
        Self {
            position,
            velocity: zero_vector(),
            force: zero_vector(),
            mass,
            radius,
            color: WELL_COLOR,
            kind: BodyKind::Well,
        }
    }

    /// Random-world particle; radius follows `floor(3 + mass / 6)`.
    pub fn particle(position: Point, velocity: Vector, mass: Real) -> Self {
        Self {
            position,
            velocity,
            force: zero_vector(),
            mass,
            radius: (3.0 + mass / 6.0).floor(),
            color: PARTICLE_COLOR,
            kind: BodyKind::Particle,
        }
    }

    /// Particle injected by a mouse press.
    pub fn click_particle(position: Point, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            force: zero_vector(),
            mass: CLICK_PARTICLE_MASS,
            radius: CLICK_PARTICLE_RADIUS,
            color: CLICK_PARTICLE_COLOR,
            kind: BodyKind::Particle,
        }
    }

    #[inline(always)]
    pub fn is_well(&self) -> bool {
        matches!(self.kind, BodyKind::Well)
    }

    #[inline(always)]
    pub fn is_particle(&self) -> bool {
        matches!(self.kind, BodyKind::Particle)
    }

    /// Semi-implicit Euler step. Wells keep their velocity and position.
    /// The force accumulator is cleared for every kind.
    #[inline(always)]
    pub fn integrate(&mut self, dt: Real, max_speed: Real) {
        match self.kind {
            BodyKind::Particle => {
                self.velocity = clamp_speed(self.velocity + self.force * dt, max_speed);
                self.position += self.velocity * dt;
            }
            BodyKind::Well => {}
        }
        self.force = zero_vector();
    }

    #[inline(always)]
    pub fn contains(&self, point: Point) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Add `mass` and regrow the radius from the new total.
    pub fn absorb(&mut self, mass: Real) {
        self.mass += mass;
        self.radius = well_radius(self.mass);
    }
}

/// Radius of a well holding `mass`.
#[inline]
pub fn well_radius(mass: Real) -> Real {
    (WELL_RADIUS_BASE + mass.sqrt() * WELL_RADIUS_SQRT_SCALE)
        .max(WELL_RADIUS_FLOOR)
        .floor()
}
