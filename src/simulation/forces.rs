//! Force / acceleration contributors for the simulation
//!
//! Defines the acceleration trait, the term set the integrators call,
//! and direct-sum Newtonian gravity

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms (gravity, drag, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }

    /// Fresh acceleration field for `sys`, one vector per body.
    /// Pure: the input is not touched and nothing is cached.
    pub fn compute_acceleration(&self, sys: &System) -> Vec<NVec3> {
        let mut out = vec![NVec3::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys, &mut out);
        out
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity, direct n^2 sum.
///
/// Coincident bodies (zero separation) exert no force on each other.
/// `eps2 > 0` adds Plummer softening; with `eps2 == 0` this is the plain
/// `G m_j r / |r|^3` law.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { G: g, eps2: 0.0 }
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n < 2 { // nothing to pair with
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;

                // Squared separation |r|^2
                let r2 = r.dot(&r);

                // Coincident pair: no force either way
                if r2 == 0.0 {
                    continue;
                }

                // d2 = |r|^2 + eps^2
                let d2 = r2 + self.eps2;

                // 1 / |r|^3, applied to r directly instead of normalizing it
                let inv_r = d2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r|^3
                let coef = self.G * inv_r3;

                // a_i +=  G m_j r / |r|^3
                // a_j += -G m_i r / |r|^3
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
