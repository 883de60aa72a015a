//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodiesConfig`]     – initial population, explicit or randomized
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   arena_size: 600.0       # side length of the square arena
//!   gravity: 1.0            # accel of gravity, +y is down
//!   wall_restitution: 0.8   # fraction of normal speed kept at walls
//!   pixels_per_unit: 222.0  # unit scale for pointer force and integration
//!   pointer_offset: 0.1     # singularity guard for the pointer force
//!
//! bodies:
//!   explicit:
//!     - x: [ 30.0, 100.0 ]
//!       v: [ 1.0, 0.0 ]
//!       radius: 30.0
//!     - x: [ 200.0, 100.0 ]
//!       v: [ 0.0, 0.0 ]
//!       radius: 30.0
//! ```
//!
//! or, for a randomized population:
//!
//! ```yaml
//! bodies:
//!   random:
//!     count: 70
//!     seed: 42
//!     speed_range: [ -2.0, 2.0 ]
//!     radius_range: [ 5.0, 25.0 ]
//! ```
//!
//! All fields of `parameters` except `arena_size` carry defaults. The
//! engine maps this configuration into its internal runtime scenario
//! representation, validating every value fail-fast along the way.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Error type for scenario loading and validation.
///
/// Every variant is a local contract violation reported immediately to
/// the caller; nothing is clamped, retried, or logged-and-ignored.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NonPositiveArena(f64),
    NonPositiveRadius(f64),
    RestitutionOutOfRange(f64),
    NonPositiveScale(f64),
    NonPositiveOffset(f64),
    InvalidTimeStep(f64),
    EmptyPopulation,
    BadVectorArity { field: &'static str, len: usize },
    BadRange { field: &'static str, lo: f64, hi: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            ConfigError::NonPositiveArena(v) => {
                write!(f, "arena_size must be > 0, got {}", v)
            }
            ConfigError::NonPositiveRadius(v) => {
                write!(f, "body radius must be > 0, got {}", v)
            }
            ConfigError::RestitutionOutOfRange(v) => {
                write!(f, "wall_restitution must be in (0, 1), got {}", v)
            }
            ConfigError::NonPositiveScale(v) => {
                write!(f, "pixels_per_unit must be > 0, got {}", v)
            }
            ConfigError::NonPositiveOffset(v) => {
                write!(f, "pointer_offset must be > 0, got {}", v)
            }
            ConfigError::InvalidTimeStep(v) => {
                write!(f, "tick dt must be positive and finite, got {}", v)
            }
            ConfigError::EmptyPopulation => {
                write!(f, "a scenario needs at least one body")
            }
            ConfigError::BadVectorArity { field, len } => {
                write!(f, "field `{}` must have exactly 2 components, got {}", field, len)
            }
            ConfigError::BadRange { field, lo, hi } => {
                write!(f, "field `{}` is not a valid range: [{}, {}]", field, lo, hi)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

fn default_gravity() -> f64 {
    1.0
}

fn default_restitution() -> f64 {
    0.8
}

fn default_scale() -> f64 {
    222.0
}

fn default_pointer_offset() -> f64 {
    0.1
}

fn default_seed() -> u64 {
    0
}

fn default_speed_range() -> [f64; 2] {
    [-2.0, 2.0]
}

fn default_radius_range() -> [f64; 2] {
    [5.0, 25.0]
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub arena_size: f64, // side length of the square arena, required

    #[serde(default = "default_gravity")]
    pub gravity: f64, // gravitational acceleration, +y is down

    #[serde(default = "default_restitution")]
    pub wall_restitution: f64, // fraction of normal speed kept at walls

    #[serde(default = "default_scale")]
    pub pixels_per_unit: f64, // unit scale between simulation space and pixels

    #[serde(default = "default_pointer_offset")]
    pub pointer_offset: f64, // keeps the pointer force finite at zero distance
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, two components
    pub v: Vec<f64>, // initial velocity, two components
    pub radius: f64, // radius, doubles as mass in the collision model
}

/// Configuration of the seeded random body spawner
///
/// Position is uniform in the arena, horizontal velocity uniform in
/// `speed_range`, vertical velocity zero, radius uniform in
/// `radius_range`. Bounds are configurable so tests can
/// pin them down instead of relying on hard-coded values.
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize, // population size, must be > 0

    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed to make runs reproducible

    #[serde(default = "default_speed_range")]
    pub speed_range: [f64; 2], // horizontal velocity bounds

    #[serde(default = "default_radius_range")]
    pub radius_range: [f64; 2], // radius bounds, lower bound must be > 0
}

/// Initial population: explicit body list or a randomized spawn spec
/// `bodies: { explicit: [...] }` or `bodies: { random: {...} }`
#[derive(Deserialize, Debug)]
pub enum BodiesConfig {
    #[serde(rename = "explicit")]
    Explicit(Vec<BodyConfig>),

    #[serde(rename = "random")]
    Random(SpawnConfig),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub bodies: BodiesConfig, // initial population of the system
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    ///
    /// Parsing alone does not validate values; validation happens when the
    /// runtime scenario is built.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let cfg: ScenarioConfig = serde_yaml::from_str(&contents)?;
        Ok(cfg)
    }
}
