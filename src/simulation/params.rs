//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and number of steps,
//! - gravitational constant `G` and optional softening `eps2`

use crate::error::ConfigError;

/// Physically scaled default for `G` in m^3 kg^-1 s^-2
pub const DEFAULT_G: f64 = 6.6743e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps: usize, // number of steps in the run
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 = plain inverse square
}

impl Parameters {
    pub fn new(dt: f64, steps: usize) -> Self {
        Self {
            dt,
            steps,
            G: DEFAULT_G,
            eps2: 0.0,
        }
    }

    /// Reject values that would silently corrupt the run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep { dt: self.dt });
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(ConfigError::InvalidGravitationalConstant { g: self.G });
        }
        if !(self.eps2.is_finite() && self.eps2 >= 0.0) {
            return Err(ConfigError::InvalidSoftening { eps2: self.eps2 });
        }
        Ok(())
    }
}
