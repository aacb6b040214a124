pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{euler_step, symplectic_euler_step, rk4_step, verlet_step};
pub use simulation::engine::{Engine, Clock};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::initializer::random_bodies;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, RandomConfig, ScenarioConfig};

pub use visualization::trace::{Renderer, TraceRenderer};
#[cfg(feature = "viewer")]
pub use visualization::viewer3d::run_3d;

pub use benchmark::benchmark::bench_integrators;

pub use error::ConfigError;
