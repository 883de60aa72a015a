//! Force / acceleration contributors for the ball engine
//!
//! Defines the per-tick input bundle and the acceleration machinery:
//! uniform gravity plus the optional pointer-driven force field.
//! Each term implements [`Acceleration`] and their contributions are
//! summed into a single acceleration vector per body.

use crate::configuration::config::ConfigError;
use crate::simulation::states::{NVec2, System};

/// Pointer force field mode for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    None,
    Repel,   // push away from the pointer
    Attract, // same magnitude, directed toward the pointer
}

/// External inputs for a single tick, supplied by the driver
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub dt: f64, // elapsed seconds since the previous tick
    pub pointer: NVec2, // pointer position in arena coordinates
    pub left_down: bool, // repel
    pub right_down: bool, // attract
}

impl TickInput {
    /// Build a validated tick input; `dt` must be positive and finite
    pub fn new(
        dt: f64,
        pointer: NVec2,
        left_down: bool,
        right_down: bool,
    ) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(dt));
        }
        Ok(Self {
            dt,
            pointer,
            left_down,
            right_down,
        })
    }

    /// Gravity-only input with no pointer interaction
    pub fn coasting(dt: f64) -> Result<Self, ConfigError> {
        Self::new(dt, NVec2::zeros(), false, false)
    }

    /// Mode derived from the button pair; attract wins when both are held
    pub fn pointer_mode(&self) -> PointerMode {
        if self.right_down {
            PointerMode::Attract
        } else if self.left_down {
            PointerMode::Repel
        } else {
            PointerMode::None
        }
    }
}

/// Collection of acceleration terms (gravity, pointer force)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys` under `input`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, input: &TickInput, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(input, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, input: &TickInput, sys: &System, out: &mut [NVec2]);
}

/// Constant downward gravity
/// Screen coordinates: +y points toward the bottom wall
pub struct UniformGravity {
    pub g: f64, // gravitational acceleration
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, _input: &TickInput, _sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            a.y += self.g;
        }
    }
}

/// Pointer-driven inverse-distance force field
///
/// For each body, with `d` the pointer distance in simulation units
/// (`|x - pointer| / scale`), the acceleration magnitude is
/// `1 / (d + offset)^3`, negated for attract. The `offset` term keeps the
/// magnitude finite as d -> 0; it bounds, not eliminates, large
/// accelerations at small distances. A body exactly on the pointer gets
/// zero acceleration since the displacement vector vanishes.
pub struct PointerForce {
    pub scale: f64, // pixels per simulation unit
    pub offset: f64, // singularity guard, > 0
}

impl Acceleration for PointerForce {
    fn acceleration(&self, input: &TickInput, sys: &System, out: &mut [NVec2]) {
        let sign = match input.pointer_mode() {
            PointerMode::None => return,
            PointerMode::Repel => 1.0,
            PointerMode::Attract => -1.0,
        };

        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            // Displacement from pointer to body, in pixels
            let r = b.x - input.pointer;

            // Pointer distance in simulation units
            let d = r.norm() / self.scale;

            // Inverse-distance magnitude, offset keeps it finite at d = 0
            let mag = sign / (d + self.offset).powi(3);

            // Decompose along the displacement vector
            *a += (mag / self.scale) * r;
        }
    }
}
