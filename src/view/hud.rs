use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::core::WorldState;
use crate::solver::AbsorptionLog;

#[derive(Component)]
pub struct HudText;

pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

pub fn update_hud(
    diagnostics: Res<DiagnosticsStore>,
    state: Res<WorldState>,
    log: Res<AbsorptionLog>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);

    let bodies = state.bodies();
    let mut lines = vec![
        format!("FPS: {:.1}", fps),
        format!("Bodies: {}", bodies.len()),
        format!("Particles: {}", bodies.particle_count()),
        format!("Absorbed: {}", log.total),
    ];
    for (index, (_, well)) in bodies.wells().enumerate() {
        lines.push(format!(
            "Black hole {}: mass {:.0}, radius {}",
            index + 1,
            well.mass,
            well.radius
        ));
    }
    let content = lines.join("\n");

    for mut text in &mut query {
        text.0.clone_from(&content);
    }
}
