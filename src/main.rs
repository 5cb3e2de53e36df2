use bevy::prelude::*;
use bevy::window::WindowResolution;

use blackhole2d::GravityPlugin;
use blackhole2d::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use blackhole2d::view::SandboxViewPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT)
                    .with_scale_factor_override(1.0),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GravityPlugin)
        .add_plugins(SandboxViewPlugin)
        .run()
}
