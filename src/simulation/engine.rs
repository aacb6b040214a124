//! High-level runtime engine settings and the simulation clock
//!
//! `Engine` records which integrator drives the run. It is chosen once
//! when the `Scenario` is built and never changes afterwards.
//! `Clock` counts completed steps; only the driver advances it.

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler, symplectic_euler, rk4 or verlet
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    pub step: usize, // completed steps
    pub dt: f64, // fixed increment
    pub steps: usize, // steps in the whole run
}

impl Clock {
    pub fn new(dt: f64, steps: usize) -> Self {
        Self { step: 0, dt, steps }
    }

    /// Elapsed simulated time
    pub fn time(&self) -> f64 {
        self.step as f64 * self.dt
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    pub(crate) fn tick(&mut self) {
        self.step += 1;
    }
}
