use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use blackhole2d::{AbsorptionLog, Body, GravityPlugin, SimParams, WorldState};

const STEP: f32 = 1.0 / 60.0;

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// App with only the two wells, advancing `frame` of virtual time per update.
fn stepped_app(params: SimParams, frame: Duration) -> App {
    let mut app = headless_app();
    app.insert_resource(params.with_initial_particles(0));
    app.add_plugins(GravityPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
    // run Startup so later bodies are not cleared by world population
    app.update();
    app
}

#[test]
fn plugin_populates_world_on_startup() {
    let mut app = headless_app();
    app.add_plugins(GravityPlugin);
    app.update();

    let state = app.world().resource::<WorldState>();
    assert_eq!(state.bodies().wells().count(), 2);
    assert_eq!(state.body_count(), 42);
    assert!(app.world().contains_resource::<AbsorptionLog>());
}

#[test]
fn plugin_picks_up_inserted_params() {
    let mut app = headless_app();
    app.insert_resource(SimParams::default().with_initial_particles(3).with_max_speed(120.0));
    app.add_plugins(GravityPlugin);
    app.update();

    let state = app.world().resource::<WorldState>();
    assert_eq!(state.body_count(), 5);
    assert_eq!(state.params().max_speed, 120.0);
}

#[test]
fn fixed_steps_pull_a_particle_into_the_nearest_well() {
    let mut app = stepped_app(SimParams::default(), Duration::from_millis(20));

    let (well, particle) = {
        let mut state = app.world_mut().resource_mut::<WorldState>();
        let (well, position) = {
            let (id, body) = state.bodies().get_index(0).unwrap();
            (id, body.position)
        };
        let particle = state.add_body(Body::particle(
            position - Vec2::new(100.0, 0.0),
            Vec2::ZERO,
            10.0,
        ));
        (well, particle)
    };

    for _ in 0..400 {
        app.update();
    }

    let state = app.world().resource::<WorldState>();
    assert!(!state.bodies().contains(particle));
    assert_eq!(state.bodies().get(well).unwrap().mass, 9010.0);
    assert_eq!(state.body_count(), 2);
    assert_eq!(app.world().resource::<AbsorptionLog>().total, 1);
}

#[test]
fn each_fixed_step_advances_by_one_sixtieth_of_a_second() {
    // no gravity: the particle drifts at a constant 60 px/s, one pixel per step
    let params = SimParams::default().with_gravity_constant(0.0);
    let mut app = stepped_app(params, Duration::from_millis(20));

    let particle = app
        .world_mut()
        .resource_mut::<WorldState>()
        .add_body(Body::particle(Vec2::new(100.0, 600.0), Vec2::new(60.0, 0.0), 10.0));
    let position = |app: &App| {
        app.world()
            .resource::<WorldState>()
            .bodies()
            .get(particle)
            .unwrap()
            .position
    };

    let start = position(&app);
    let mut previous = start;
    for _ in 0..300 {
        app.update();
        let current = position(&app);
        let moved = current.x - previous.x;
        // whole number of steps per update, never a partial one
        assert!((moved - moved.round()).abs() < 1e-2, "moved {moved}");
        assert!((0.0..=2.0 + 1e-2).contains(&moved));
        assert_eq!(current.y, 600.0);
        previous = current;
    }

    // 300 updates of 20 ms is 6 s, i.e. 360 steps of 1/60 s
    let steps = (previous.x - start.x) / (60.0 * STEP);
    assert!((steps - 360.0).abs() <= 1.5, "ran {steps} steps");
}
