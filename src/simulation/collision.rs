//! Pairwise and wall collision resolution
//!
//! Balls collide elastically with each other (mass ~ radius) and
//! inelastically with the arena walls (restitution coefficient).
//!
//! Pair resolution visits every unordered pair exactly once per tick in
//! ascending-index order: outer index i, inner index j > i. The order is
//! part of the engine contract, not an implementation detail: when three
//! or more balls overlap in the same tick, the outcome depends on which
//! pair is corrected first, and callers rely on the fixed order for
//! determinism. Resolving a pair may reintroduce overlap with a third
//! body; that is an accepted single-pass approximation.

use crate::simulation::states::{Body, System};

/// Two centers closer than this are treated as coincident. The pair is
/// skipped for the tick: there is no defined separation axis, and the
/// guard keeps a division by zero from leaking NaN into the state.
const COINCIDENT_EPS: f64 = 1.0e-12;

/// Detect circle overlap between two balls and resolve it in place.
///
/// With `overlap = (r1 + r2) - |x2 - x1|`:
/// - `overlap < 0`: no contact, both bodies untouched;
/// - otherwise each body is pushed `overlap / 2` along the separation
///   axis (an even split regardless of radius), then velocities are
///   exchanged by the classical two-body elastic formula with mass taken
///   proportional to radius, evaluated at the corrected positions.
///
/// Post-condition: center distance equals `r1 + r2` (touching), except
/// the coincident-center case, which is a no-op.
pub fn resolve_pair(b1: &mut Body, b2: &mut Body) {
    // Displacement from b1 to b2 and separation distance
    let r = b2.x - b1.x;
    let dist = r.norm();

    let overlap = (b1.radius + b2.radius) - dist;
    if overlap < 0.0 {
        return; // no contact
    }
    if dist < COINCIDENT_EPS {
        return; // coincident centers, no separation axis
    }

    // Normalized vector from b1 to b2
    let n_hat = r / dist;

    // Move both overlapping balls apart by half the overlap each
    b2.x += n_hat * (overlap / 2.0);
    b1.x -= n_hat * (overlap / 2.0);

    // Elastic velocity exchange, conservation of energy/momentum:
    //   v1' = v1 - (2 m2 / (m1 + m2)) (<v1-v2, x1-x2> / |x1-x2|^2) (x1-x2)
    // and symmetric for v2', with m = radius, using the separated
    // positions (|x1-x2| is now exactly r1 + r2)
    let d = b1.x - b2.x;
    let d2 = d.norm_squared();
    let dv = b1.v - b2.v;
    let m1 = b1.radius;
    let m2 = b2.radius;
    let coef = 2.0 * dv.dot(&d) / ((m1 + m2) * d2);

    b1.v -= m2 * coef * d;
    b2.v += m1 * coef * d;
}

/// Run pair resolution for every unordered pair in ascending-index order
pub fn resolve_pairs(sys: &mut System) {
    let n = sys.bodies.len();
    for i in 0..n {
        // split_at_mut yields body i and every j > i as disjoint borrows
        let (head, tail) = sys.bodies.split_at_mut(i + 1);
        let bi = &mut head[i];
        for bj in tail.iter_mut() {
            resolve_pair(bi, bj);
        }
    }
}

/// Inelastic collision with the arena walls
///
/// Clamps the ball so its circle lies inside `[0, arena_size]^2` and
/// reflects the struck velocity component scaled by the restitution
/// coefficient. Each axis is an exclusive two-branch check (a ball cannot
/// hit both walls of one axis in a single call), far wall first.
pub fn resolve_walls(b: &mut Body, arena_size: f64, restitution: f64) {
    if b.x.x + b.radius > arena_size {
        b.v.x = -restitution * b.v.x;
        b.x.x = arena_size - b.radius;
    } else if b.x.x < b.radius {
        b.v.x = -restitution * b.v.x;
        b.x.x = b.radius;
    }
    if b.x.y + b.radius > arena_size {
        b.v.y = -restitution * b.v.y;
        b.x.y = arena_size - b.radius;
    } else if b.x.y < b.radius {
        b.v.y = -restitution * b.v.y;
        b.x.y = b.radius;
    }
}
