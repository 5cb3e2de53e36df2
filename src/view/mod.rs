//! Window-side systems: camera, body visuals, field arrows, mouse input, HUD.
//!
//! Simulation space is pixel space with the origin at the top-left corner
//! and y pointing down. Bevy world space has the origin at the window
//! centre and y pointing up.

use bevy::camera::ScalingMode;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

pub mod arrows;
pub mod bodies;
pub mod hud;
pub mod input;

use crate::config::BG_COLOR;
use crate::core::WorldState;
use crate::solver::force_update;

pub use arrows::draw_vector_field;
pub use bodies::{BodyVisual, sync_body_visuals};
pub use hud::{HudText, setup_hud, update_hud};
pub use input::spawn_particles_on_click;

/// Map a point of the `domain`-sized simulation onto world space.
#[inline]
pub fn sim_to_world(position: Vec2, domain: Vec2) -> Vec2 {
    Vec2::new(position.x - domain.x * 0.5, domain.y * 0.5 - position.y)
}

#[inline]
pub fn world_to_sim(position: Vec2, domain: Vec2) -> Vec2 {
    Vec2::new(position.x + domain.x * 0.5, domain.y * 0.5 - position.y)
}

/// The camera always shows exactly the simulation domain, whatever the window size.
fn setup_camera(mut commands: Commands, state: Res<WorldState>) {
    let domain = state.params().domain();
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: domain.x,
                height: domain.y,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub struct SandboxViewPlugin;

impl Plugin for SandboxViewPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        app.insert_resource(ClearColor(BG_COLOR));
        app.add_systems(Startup, (setup_camera, setup_hud));
        app.add_systems(FixedUpdate, spawn_particles_on_click.before(force_update));
        app.add_systems(Update, (sync_body_visuals, draw_vector_field, update_hud));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEIGHT, WIDTH};

    const DOMAIN: Vec2 = Vec2::new(WIDTH, HEIGHT);

    #[test]
    fn corners_map_to_window_edges() {
        assert_eq!(sim_to_world(Vec2::ZERO, DOMAIN), Vec2::new(-WIDTH * 0.5, HEIGHT * 0.5));
        assert_eq!(
            sim_to_world(DOMAIN, DOMAIN),
            Vec2::new(WIDTH * 0.5, -HEIGHT * 0.5)
        );
        assert_eq!(sim_to_world(DOMAIN * 0.5, DOMAIN), Vec2::ZERO);
    }

    #[test]
    fn world_to_sim_inverts_sim_to_world() {
        let p = Vec2::new(123.5, 456.25);
        assert_eq!(world_to_sim(sim_to_world(p, DOMAIN), DOMAIN), p);
    }

    #[test]
    fn mapping_follows_a_custom_domain() {
        let domain = Vec2::new(400.0, 200.0);
        assert_eq!(sim_to_world(Vec2::ZERO, domain), Vec2::new(-200.0, 100.0));
        assert_eq!(sim_to_world(domain, domain), Vec2::new(200.0, -100.0));
        assert_eq!(world_to_sim(Vec2::ZERO, domain), Vec2::new(200.0, 100.0));
    }
}
