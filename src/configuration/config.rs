//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator selection
//! - [`ParametersConfig`] – step size, step count and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`RandomConfig`]     – seeded random bodies, used when `bodies` is absent
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: rk4         # euler | symplectic_euler | rk4 | verlet
//!
//! parameters:
//!   dt: 0.5                 # fixed step size
//!   steps: 1000             # number of steps
//!   G: 6.6743e-11           # gravitational constant (optional)
//!   eps2: 0.0               # softening epsilon^2 (optional)
//!
//! bodies:
//!   - x: [ -5.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0e10
//!   - x: [  5.0, 0.0, 0.0 ]
//!     v: [  0.0, 0.0, 0.0 ]
//!     m: 1.0e10
//! ```
//!
//! Nothing is checked here; `Scenario::build_scenario` validates while
//! mapping this into runtime types.

use serde::Deserialize;

use crate::simulation::params::DEFAULT_G;

/// Which integrator method used by the engine
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorConfig {
    /// Euler, velocity first then position. Cheapest, energy drifts
    Euler,

    /// Symplectic Euler, same update as `Euler`
    #[value(name = "symplectic_euler")]
    SymplecticEuler,

    /// Classical 4th-order Runge–Kutta, four force evaluations per step
    #[default]
    Rk4,

    /// Velocity Verlet. Time-reversible, two force evaluations per step
    Verlet,
}

impl IntegratorConfig {
    pub const ALL: [IntegratorConfig; 4] = [
        IntegratorConfig::Euler,
        IntegratorConfig::SymplecticEuler,
        IntegratorConfig::Rk4,
        IntegratorConfig::Verlet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntegratorConfig::Euler => "euler",
            IntegratorConfig::SymplecticEuler => "symplectic_euler",
            IntegratorConfig::Rk4 => "rk4",
            IntegratorConfig::Verlet => "verlet",
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // Time integrator used for the whole run
}

fn default_g() -> f64 {
    DEFAULT_G
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,      // time step size
    pub steps: usize, // number of steps
    #[serde(default = "default_g")]
    pub G: f64,       // gravitational constant
    #[serde(default)]
    pub eps2: f64,    // softening, 0 disables it
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position, 3 components
    pub v: Vec<f64>, // Initial velocity, 3 components
    pub m: f64,      // Mass of the body
}

fn default_count() -> usize {
    3
}

fn default_seed() -> u64 {
    42
}

fn default_mass() -> f64 {
    1.0e10
}

fn default_position_range() -> f64 {
    10.0
}

fn default_velocity_range() -> f64 {
    0.1
}

/// Seeded random initial conditions.
/// Each coordinate is drawn uniformly from `[-range, range]`.
#[derive(Deserialize, Debug, Clone)]
pub struct RandomConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_position_range")]
    pub position_range: f64,
    #[serde(default = "default_velocity_range")]
    pub velocity_range: f64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: default_seed(),
            mass: default_mass(),
            position_range: default_position_range(),
            velocity_range: default_velocity_range(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Integrator selection
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>, // Explicit initial state, wins over `random`
    #[serde(default)]
    pub random: Option<RandomConfig>, // Sampled initial state
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
