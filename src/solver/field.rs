//! Gravity field sampling for the background arrows.
//!
//! Read-only on the world; has no effect on the simulation.

use crate::config::SimParams;
use crate::core::BodySet;
use crate::math::{Point, Vector, softened_pull, zero_vector};

/// Display arrow for one field sample, in simulation coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldArrow {
    pub origin: Point,
    pub tip: Point,
}

/// Net pull at `point` from every body. The point itself has no mass.
pub fn field_at(bodies: &BodySet, params: &SimParams, point: Point) -> Vector {
    bodies.bodies().fold(zero_vector(), |acc, body| {
        acc + softened_pull(
            point,
            body.position,
            body.mass,
            params.gravity_constant,
            params.softening,
        )
    })
}

/// Sample the field on a regular grid starting at the origin.
///
/// Each arrow has length `0.75 * spacing` and points along the local field.
/// Points with zero field produce no arrow.
pub fn sample_field(bodies: &BodySet, params: &SimParams) -> Vec<FieldArrow> {
    let spacing = params.field_spacing.max(1);
    let length = spacing as f32 * 0.5 * 1.5;
    let columns = (0..params.width.ceil() as u32).step_by(spacing as usize);

    let mut arrows = Vec::new();
    for gx in columns {
        for gy in (0..params.height.ceil() as u32).step_by(spacing as usize) {
            let origin = Point::new(gx as f32, gy as f32);
            let field = field_at(bodies, params, origin);
            let magnitude = field.length();
            if magnitude > 0.0 {
                arrows.push(FieldArrow {
                    origin,
                    tip: origin + field / magnitude * length,
                });
            }
        }
    }
    arrows
}
