use bevy::math::Vec2;

pub type Real = f32;

pub type Vector = Vec2;
pub type Point = Vec2;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec2::ZERO
}

/// Unit vector at `angle` radians scaled to `speed`.
#[inline(always)]
pub fn from_polar(angle: Real, speed: Real) -> Vector {
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}

/// Softened inverse-square pull exerted on `at` by a point mass at `source`.
///
/// The returned vector is `G * mass / (r² + softening)` along `(source - at) / sqrt(r² + softening)`.
/// A source sitting exactly on `at` contributes nothing.
#[inline(always)]
pub fn softened_pull(at: Point, source: Point, mass: Real, g: Real, softening: Real) -> Vector {
    let d = source - at;
    let dist2 = d.length_squared() + softening;
    if dist2 <= 0.0 {
        return zero_vector();
    }
    let dist = dist2.sqrt();
    let a = g * mass / dist2;
    d * (a / dist)
}

/// Uniformly rescale `velocity` so its magnitude does not exceed `max_speed`.
#[inline(always)]
pub fn clamp_speed(velocity: Vector, max_speed: Real) -> Vector {
    let speed = velocity.length();
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Single-step toroidal wrap into `[0, width] x [0, height]`.
///
/// Only one period is removed per axis; callers move bodies by less than a
/// domain width per frame.
#[inline(always)]
pub fn wrap_toroidal(mut position: Point, width: Real, height: Real) -> Point {
    if position.x < 0.0 {
        position.x += width;
    }
    if position.x > width {
        position.x -= width;
    }
    if position.y < 0.0 {
        position.y += height;
    }
    if position.y > height {
        position.y -= height;
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_speed_keeps_direction() {
        let v = clamp_speed(Vec2::new(300.0, 400.0), 50.0);
        assert!((v.length() - 50.0).abs() < 1e-4);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn clamp_speed_leaves_slow_and_zero_velocities() {
        assert_eq!(clamp_speed(Vec2::new(3.0, 4.0), 10.0), Vec2::new(3.0, 4.0));
        assert_eq!(clamp_speed(Vec2::ZERO, 10.0), Vec2::ZERO);
    }

    #[test]
    fn wrap_handles_each_edge_once() {
        assert_eq!(wrap_toroidal(Vec2::new(905.0, 10.0), 900.0, 700.0), Vec2::new(5.0, 10.0));
        assert_eq!(wrap_toroidal(Vec2::new(-5.0, 10.0), 900.0, 700.0), Vec2::new(895.0, 10.0));
        assert_eq!(wrap_toroidal(Vec2::new(10.0, 705.0), 900.0, 700.0), Vec2::new(10.0, 5.0));
        assert_eq!(wrap_toroidal(Vec2::new(10.0, -5.0), 900.0, 700.0), Vec2::new(10.0, 695.0));
        // exactly on the bound stays put
        assert_eq!(wrap_toroidal(Vec2::new(900.0, 700.0), 900.0, 700.0), Vec2::new(900.0, 700.0));
    }

    #[test]
    fn coincident_source_pulls_nothing() {
        let p = Vec2::new(12.0, 34.0);
        assert_eq!(softened_pull(p, p, 100.0, 50.0, 10.0), Vec2::ZERO);
    }

    #[test]
    fn pull_matches_softened_law() {
        let f = softened_pull(Vec2::ZERO, Vec2::new(3.0, 4.0), 2.0, 50.0, 10.0);
        let dist2: f32 = 25.0 + 10.0;
        let expected = 50.0 * 2.0 / dist2 * 5.0 / dist2.sqrt();
        assert!((f.length() - expected).abs() < 1e-5);
        assert!(f.x > 0.0 && f.y > 0.0);
    }
}
