//! Build fully-initialized, validated simulation scenarios and drive them
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`, the one integrator for this run)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the simulation clock (`Clock`)
//!
//! A `Scenario` is stepped either one step at a time (`step`, used by the
//! viewer's frame loop) or to completion with a renderer observing every
//! step (`run`). Either way a step fully completes before anything can
//! read the state.

use log::{debug, info, trace, warn};

use crate::configuration::config::{BodyConfig, IntegratorConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::engine::{Clock, Engine};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::initializer::random_bodies;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::visualization::trace::Renderer;

/// Runtime bundle for one simulation run.
///
/// With the `viewer` feature this is also a Bevy `Resource`, read by the
/// frame systems that step and draw it.
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub clock: Clock,
    initial_energy: f64,
    non_finite_reported: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps: p_cfg.steps,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
        };

        // Bodies: explicit list first, sampled ones otherwise
        let bodies = match (cfg.bodies, cfg.random) {
            (Some(list), _) => list
                .iter()
                .enumerate()
                .map(|(i, bc)| body_from_config(i, bc))
                .collect::<Result<Vec<Body>, ConfigError>>()?,
            (None, Some(rc)) => {
                debug!("sampling {} bodies with seed {}", rc.count, rc.seed);
                random_bodies(&rc)?
            }
            (None, None) => return Err(ConfigError::NoBodies),
        };

        Self::from_parts(System::new(bodies), parameters, cfg.engine.integrator)
    }

    /// Assemble a scenario from runtime types, with the same checks as
    /// `build_scenario`
    pub fn from_parts(system: System, parameters: Parameters, integrator: IntegratorConfig) -> Result<Self, ConfigError> {
        parameters.validate()?;
        validate_system(&system)?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        let clock = Clock::new(parameters.dt, parameters.steps);
        let initial_energy = system.total_energy(parameters.G, parameters.eps2);

        info!(
            "scenario: {} bodies, integrator {}, dt {}, {} steps",
            system.len(),
            integrator.name(),
            parameters.dt,
            parameters.steps
        );

        Ok(Self {
            engine: Engine { integrator },
            parameters,
            system,
            forces,
            clock,
            initial_energy,
            non_finite_reported: false,
        })
    }

    /// Current body store
    pub fn state(&self) -> &System {
        &self.system
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Advance by one step. Returns false without touching the state once
    /// the configured number of steps has been taken.
    pub fn step(&mut self) -> bool {
        if self.clock.is_finished() {
            return false;
        }

        self.engine.integrator.step(&mut self.system, &self.forces, self.clock.dt);
        self.clock.tick();
        trace!("step {} t = {}", self.clock.step, self.clock.time());

        // NaN/Inf are not recovered from, only reported once
        if !self.non_finite_reported && !self.system.is_finite() {
            warn!("state became non-finite at step {}", self.clock.step);
            self.non_finite_reported = true;
        }
        true
    }

    /// Step to completion, handing the state to `renderer` after every step.
    /// Returns the number of steps taken by this call.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> usize {
        let mut taken = 0;
        while self.step() {
            renderer.render(&self.clock, &self.system);
            taken += 1;
        }

        info!(
            "finished {} steps at t = {}, relative energy drift {:.3e}",
            self.clock.step,
            self.clock.time(),
            self.energy_drift()
        );
        taken
    }

    /// |E - E_0| / |E_0| against the energy at build time
    pub fn energy_drift(&self) -> f64 {
        let e = self.system.total_energy(self.parameters.G, self.parameters.eps2);
        if self.initial_energy == 0.0 {
            return (e - self.initial_energy).abs();
        }
        ((e - self.initial_energy) / self.initial_energy).abs()
    }
}

fn body_from_config(index: usize, bc: &BodyConfig) -> Result<Body, ConfigError> {
    let x = vec3_from_config(index, "x", &bc.x)?;
    let v = vec3_from_config(index, "v", &bc.v)?;
    Ok(Body::new(x, v, bc.m))
}

fn vec3_from_config(index: usize, field: &'static str, c: &[f64]) -> Result<NVec3, ConfigError> {
    match c {
        [a, b, z] => Ok(NVec3::new(*a, *b, *z)),
        _ => Err(ConfigError::WrongDimension { index, field, len: c.len() }),
    }
}

fn validate_system(system: &System) -> Result<(), ConfigError> {
    if system.len() < 2 {
        return Err(ConfigError::TooFewBodies { count: system.len() });
    }
    for (index, b) in system.bodies.iter().enumerate() {
        if !(b.m.is_finite() && b.m > 0.0) {
            return Err(ConfigError::InvalidMass { index, mass: b.m });
        }
        if !b.x.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteState { index, field: "x" });
        }
        if !b.v.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteState { index, field: "v" });
        }
    }
    Ok(())
}
