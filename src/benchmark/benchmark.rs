use std::time::Instant;
use crate::simulation::forces::{AccelSet, PointerForce, TickInput, UniformGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n` spread across the arena
fn make_system(n: usize, params: &Parameters) -> System {
    let mut bodies = Vec::with_capacity(n);

    let mid = params.arena_size / 2.0;
    let spread = params.arena_size * 0.45;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            mid + (i_f * 0.37).sin() * spread,
            mid + (i_f * 0.13).cos() * spread,
        );

        bodies.push(Body::new(x, NVec2::zeros(), 3.0));
    }

    System::new(bodies)
}

/// Default parameters for benchmarking
fn make_params() -> Parameters {
    Parameters {
        arena_size: 600.0,
        g: 1.0,
        wall_restitution: 0.8,
        scale: 222.0,
        pointer_offset: 0.1,
    }
}

/// Build the standard gravity + pointer force set
fn make_forces(params: &Parameters) -> AccelSet {
    AccelSet::new()
        .with(UniformGravity { g: params.g })
        .with(PointerForce {
            scale: params.scale,
            offset: params.pointer_offset,
        })
}

/// Benchmark one full tick (all-pairs resolution dominates) for a range
/// of population sizes
pub fn bench_step() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600, 3200];
    let steps = 5; // number of ticks per size (tune as needed)

    let params = make_params();
    let input = TickInput {
        dt: 0.005,
        pointer: NVec2::zeros(),
        left_down: false,
        right_down: false,
    };

    for n in ns {
        let mut sys = make_system(n, &params);
        let forces = make_forces(&params);

        // Warm up
        euler_step(&mut sys, &forces, &params, &input);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, &params, &input);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s", per_step);
    }
}

/// Benchmark tick cost over a dense range of population sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let params = make_params();
    let input = TickInput {
        dt: 0.005,
        pointer: NVec2::zeros(),
        left_down: false,
        right_down: false,
    };

    // Steps of 100 to give a smoother graph
    for n in (100..=3200).step_by(100) {
        // Small n: average over a few ticks to smooth noise
        // Large n: fewer ticks to keep the run short
        let steps = if n <= 800 { 10 } else { 3 };

        let mut sys = make_system(n, &params);
        let forces = make_forces(&params);

        // Warm-up one tick
        euler_step(&mut sys, &forces, &params, &input);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &forces, &params, &input);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
