//! Seeded random initial conditions.
//!
//! Samples every body from the same uniform box, in order, from a ChaCha
//! stream seeded with `RandomConfig::seed`. The same seed always gives
//! the same bodies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::RandomConfig;
use crate::error::ConfigError;
use crate::simulation::states::{Body, NVec3};

/// Draw `cfg.count` bodies of mass `cfg.mass`.
/// Position components lie in `[-position_range, position_range]`,
/// velocity components in `[-velocity_range, velocity_range]`.
pub fn random_bodies(cfg: &RandomConfig) -> Result<Vec<Body>, ConfigError> {
    let position_range = checked_range("position_range", cfg.position_range)?;
    let velocity_range = checked_range("velocity_range", cfg.velocity_range)?;

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

    let bodies = (0..cfg.count)
        .map(|_| {
            let x = sample_vec(&mut rng, position_range);
            let v = sample_vec(&mut rng, velocity_range);
            Body::new(x, v, cfg.mass)
        })
        .collect();

    Ok(bodies)
}

fn checked_range(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidRange { field, value })
    }
}

fn sample_vec<R: Rng>(rng: &mut R, range: f64) -> NVec3 {
    NVec3::new(
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
    )
}
