//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet` with gravity and the pointer force)
//!
//! Bodies come either from explicit initial states or from the seeded
//! random spawner. Every configured value is validated here, fail-fast:
//! a bad radius or arena size is a `ConfigError`, never a silent clamp.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::configuration::config::{
    BodiesConfig, BodyConfig, ConfigError, ParametersConfig, ScenarioConfig, SpawnConfig,
};
use crate::simulation::forces::{AccelSet, PointerForce, UniformGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the validated parameters, the current system state, and the
/// set of active force terms. The driver steps `system` through the
/// integrator and reads body state and kinetic energy between ticks.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig, validated
        let parameters = build_parameters(&cfg.parameters)?;

        // Bodies: explicit list or seeded random spawn
        let bodies = match &cfg.bodies {
            BodiesConfig::Explicit(list) => spawn_explicit(list)?,
            BodiesConfig::Random(spawn) => spawn_random(spawn, &parameters)?,
        };
        if bodies.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        // Forces: construct an AccelSet and register gravity plus the
        // pointer force field (inert until a tick carries a button press)
        let forces = AccelSet::new()
            .with(UniformGravity { g: parameters.g })
            .with(PointerForce {
                scale: parameters.scale,
                offset: parameters.pointer_offset,
            });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

/// Validate a `ParametersConfig` and map it to runtime `Parameters`
fn build_parameters(cfg: &ParametersConfig) -> Result<Parameters, ConfigError> {
    if !(cfg.arena_size > 0.0) {
        return Err(ConfigError::NonPositiveArena(cfg.arena_size));
    }
    if !(cfg.wall_restitution > 0.0 && cfg.wall_restitution < 1.0) {
        return Err(ConfigError::RestitutionOutOfRange(cfg.wall_restitution));
    }
    if !(cfg.pixels_per_unit > 0.0) {
        return Err(ConfigError::NonPositiveScale(cfg.pixels_per_unit));
    }
    if !(cfg.pointer_offset > 0.0) {
        return Err(ConfigError::NonPositiveOffset(cfg.pointer_offset));
    }

    Ok(Parameters {
        arena_size: cfg.arena_size,
        g: cfg.gravity,
        wall_restitution: cfg.wall_restitution,
        scale: cfg.pixels_per_unit,
        pointer_offset: cfg.pointer_offset,
    })
}

/// Map explicit `BodyConfig` entries to runtime bodies
fn spawn_explicit(list: &[BodyConfig]) -> Result<Vec<Body>, ConfigError> {
    list.iter()
        .map(|bc| {
            if bc.x.len() != 2 {
                return Err(ConfigError::BadVectorArity {
                    field: "x",
                    len: bc.x.len(),
                });
            }
            if bc.v.len() != 2 {
                return Err(ConfigError::BadVectorArity {
                    field: "v",
                    len: bc.v.len(),
                });
            }
            if !(bc.radius > 0.0) {
                return Err(ConfigError::NonPositiveRadius(bc.radius));
            }
            Ok(Body::new(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.radius,
            ))
        })
        .collect()
}

/// Spawn a randomized population from a seeded PCG stream
///
/// Distribution:
/// - position uniform in `[0, arena)^2`
/// - horizontal velocity uniform in `speed_range`, vertical velocity zero
/// - radius uniform in `radius_range`
fn spawn_random(spawn: &SpawnConfig, params: &Parameters) -> Result<Vec<Body>, ConfigError> {
    if spawn.count == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    let [v_lo, v_hi] = spawn.speed_range;
    if !(v_lo <= v_hi) {
        return Err(ConfigError::BadRange {
            field: "speed_range",
            lo: v_lo,
            hi: v_hi,
        });
    }
    let [r_lo, r_hi] = spawn.radius_range;
    if !(r_lo > 0.0 && r_lo <= r_hi) {
        return Err(ConfigError::BadRange {
            field: "radius_range",
            lo: r_lo,
            hi: r_hi,
        });
    }

    let mut rng = Pcg32::seed_from_u64(spawn.seed);
    let mut bodies = Vec::with_capacity(spawn.count);

    for _ in 0..spawn.count {
        let x = NVec2::new(
            rng.random_range(0.0..params.arena_size),
            rng.random_range(0.0..params.arena_size),
        );
        let v = NVec2::new(rng.random_range(v_lo..=v_hi), 0.0);
        let radius = rng.random_range(r_lo..=r_hi);
        bodies.push(Body::new(x, v, radius));
    }

    Ok(bodies)
}
