//! Core state types for the ball simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds one ball's state using `NVec2`
//! - `System` holds the full population plus the running tick clock
//!
//! Mass is modeled proportionally to radius everywhere in the engine
//! (kinetic energy, elastic collisions). This is a deliberate
//! simplification carried by the whole model, not a real mass unit.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64, // radius, immutable after spawn, doubles as mass
    pub ke: f64, // kinetic energy, recomputed every tick
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        let mut b = Self {
            x,
            v,
            radius,
            ke: 0.0,
        };
        b.ke = b.kinetic_energy();
        b
    }

    /// Kinetic energy with mass ~ radius: `0.5 * r * |v|^2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.radius * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed population, index is identity
    pub t: f64, // time
    pub ke_total: f64, // aggregate kinetic energy of the latest tick
}

impl System {
    /// Wrap a body collection into a system at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        let ke_total = bodies.iter().map(|b| b.ke).sum();
        Self {
            bodies,
            t: 0.0,
            ke_total,
        }
    }

    /// Number of bodies in the population (fixed for the whole run)
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
