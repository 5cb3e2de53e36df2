// Domain and pacing
use bevy::prelude::*;

pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 700.0;
pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 700;
pub const FPS: f64 = 60.0;
pub const WINDOW_TITLE: &str = "Gravity with Natural Black Hole Growth";

// Force law
pub const G: f32 = 50.0;
pub const SOFTENING: f32 = 10.0;
pub const MAX_SPEED: f32 = 300.0;

// World setup
pub const INITIAL_PARTICLES: usize = 40;
pub const FIELD_SPACING: u32 = 35;

// Black holes: (position as fraction of domain, mass, radius)
pub const WELL_LAYOUT: [(Vec2, f32, f32); 2] = [
    (Vec2::new(0.4, 0.5), 9000.0, 35.0),
    (Vec2::new(0.7, 0.3), 8000.0, 30.0),
];

// Random particles
pub const PARTICLE_SPEED_RANGE: (f32, f32) = (5.0, 20.0);
pub const PARTICLE_MASS_RANGE: (f32, f32) = (5.0, 15.0);

// Click-spawned particles
pub const CLICK_PARTICLE_MASS: f32 = 10.0;
pub const CLICK_PARTICLE_RADIUS: f32 = 4.0;

// Well growth: radius = floor(max(floor, base + k * sqrt(mass)))
pub const WELL_RADIUS_FLOOR: f32 = 20.0;
pub const WELL_RADIUS_BASE: f32 = 8.0;
pub const WELL_RADIUS_SQRT_SCALE: f32 = 0.5;

// Colors
pub const BG_COLOR: Color = Color::srgb(5.0 / 255.0, 5.0 / 255.0, 20.0 / 255.0);
pub const PARTICLE_COLOR: Color = Color::srgb(200.0 / 255.0, 1.0, 1.0);
pub const CLICK_PARTICLE_COLOR: Color = Color::srgb(150.0 / 255.0, 220.0 / 255.0, 1.0);
pub const WELL_COLOR: Color = Color::srgb(1.0, 80.0 / 255.0, 80.0 / 255.0);
pub const FIELD_COLOR: Color = Color::srgb(120.0 / 255.0, 180.0 / 255.0, 1.0);
