//! Error types for scenario setup.
//!
//! Everything here is raised before the first step is taken. Once a
//! `Scenario` exists, stepping never fails: numerical blow-ups propagate
//! into the state instead of being reported.

use thiserror::Error;

/// Reasons a scenario is rejected at build time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("time step dt must be finite and positive, got {dt}")]
    InvalidTimeStep {
        dt: f64,
    },

    #[error("step count must be at least 1")]
    ZeroSteps,

    #[error("gravitational constant G must be finite and positive, got {g}")]
    InvalidGravitationalConstant {
        g: f64,
    },

    #[error("softening eps2 must be finite and non-negative, got {eps2}")]
    InvalidSoftening {
        eps2: f64,
    },

    #[error("at least 2 bodies are required, got {count}")]
    TooFewBodies {
        count: usize,
    },

    #[error("body {index} has mass {mass}, mass must be finite and positive")]
    InvalidMass {
        index: usize,
        mass: f64,
    },

    #[error("body {index} field '{field}' has {len} components, expected 3")]
    WrongDimension {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("body {index} field '{field}' contains a non-finite component")]
    NonFiniteState {
        index: usize,
        field: &'static str,
    },

    #[error("random body range '{field}' must be finite and non-negative, got {value}")]
    InvalidRange {
        field: &'static str,
        value: f64,
    },

    #[error("scenario defines neither 'bodies' nor 'random'")]
    NoBodies,
}
