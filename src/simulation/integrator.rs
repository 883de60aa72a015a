//! Fixed-order tick advance for the ball system
//!
//! One tick runs, in this order:
//! 1. pairwise collision resolution over all unordered pairs,
//! 2. wall resolution for every ball in collection order,
//! 3. explicit (forward) Euler force integration plus energy accounting.
//!
//! Pairs strictly before walls and integration is a contract: moving the
//! passes changes which overlaps get corrected before boundary clamping
//! and materially changes trajectories.

use super::collision::{resolve_pairs, resolve_walls};
use super::forces::{AccelSet, TickInput};
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one tick using explicit Euler integration
/// Updates positions, velocities, per-body kinetic energy, and `sys.t`
/// in-place; returns the tick's total kinetic energy, which is also
/// stored on `sys.ke_total` for callers reading state between ticks
pub fn euler_step(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    input: &TickInput,
) -> f64 {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, just advance the clock
        sys.t += input.dt;
        sys.ke_total = 0.0;
        return 0.0;
    }

    let dt = input.dt; // time step dt, validated by TickInput

    // Pass 1: resolve every unordered pair, ascending-index order
    resolve_pairs(sys);

    // Pass 2: clamp every ball inside the arena
    for b in sys.bodies.iter_mut() {
        resolve_walls(b, params.arena_size, params.wall_restitution);
    }

    // Allocate a vector of accelerations, one per body, and let the
    // force set accumulate contributions at the post-clamp positions
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(input, &*sys, &mut accels);

    // Euler integration of velocity then position:
    // v_n+1 = v_n + a dt
    // x_n+1 = x_n + v_n+1 dt scale
    let mut ke_total = 0.0;
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += *a * dt;
        b.x += b.v * (dt * params.scale);

        // Refresh kinetic energy and fold it into the tick total
        b.ke = b.kinetic_energy();
        ke_total += b.ke;
    }

    // Increment the system time by one full step
    sys.t += dt;
    sys.ke_total = ke_total;
    ke_total
}
