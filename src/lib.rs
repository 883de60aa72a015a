pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{
    AccelSet, Acceleration, PointerForce, PointerMode, TickInput, UniformGravity,
};
pub use simulation::collision::{resolve_pair, resolve_pairs, resolve_walls};
pub use simulation::integrator::euler_step;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodiesConfig, BodyConfig, ConfigError, ParametersConfig, ScenarioConfig, SpawnConfig,
};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
