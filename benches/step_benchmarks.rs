/// Simple custom benchmarking without criterion
use std::time::Instant;

use blackhole2d::solver::{accumulate_forces, sample_field};
use blackhole2d::{SimParams, WorldState};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn create_world(particles: usize) -> WorldState {
    let params = SimParams::default().with_initial_particles(particles);
    let mut world = WorldState::new(params);
    world.populate(&mut StdRng::seed_from_u64(17));
    world
}

fn main() {
    println!("\n=== Gravity Sandbox Benchmarks ===\n");

    println!("--- Force Accumulation ---");
    for &count in &[40, 200, 1000] {
        let mut world = create_world(count);
        time_it(&format!("accumulate_forces (n={})", count), 50, || {
            let (bodies, params) = world.bodies_mut_and_params();
            accumulate_forces(bodies, params);
        });
    }

    println!("\n--- Full Step ---");
    for &count in &[40, 200, 1000] {
        let mut world = create_world(count);
        time_it(&format!("step (n={})", count), 50, || {
            world.step(1.0 / 60.0);
        });
    }

    println!("\n--- Field Sampling ---");
    for &count in &[40, 200] {
        let world = create_world(count);
        time_it(&format!("sample_field (n={})", count), 20, || {
            let arrows = sample_field(world.bodies(), world.params());
            assert!(!arrows.is_empty() || world.bodies().is_empty());
        });
    }

    println!("\n=== Benchmark Complete ===\n");
}
