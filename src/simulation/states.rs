//! Core state types for the simulation.
//!
//! `Body` is a point mass, `System` is the ordered body store the
//! integrators mutate. Body order is stable for the whole run and is
//! what identifies a body in pairwise sums and in renderer output.
//!
//! Conserved quantities (energy, momentum, angular momentum) are computed
//! here as pure functions of the current state.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // body store, index = identity
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only position snapshot, one entry per body in store order
    pub fn positions(&self) -> Vec<NVec3> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    /// Total kinetic energy: sum of 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total gravitational potential energy over unordered pairs,
    /// `-G m_i m_j / sqrt(|r|^2 + eps2)`, consistent with the softened force.
    /// Coincident pairs contribute nothing, same as in the force sum.
    pub fn potential_energy(&self, g: f64, eps2: f64) -> f64 {
        let n = self.bodies.len();
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = self.bodies[j].x - self.bodies[i].x;
                let r2 = r.dot(&r);
                if r2 > 0.0 {
                    pe -= g * self.bodies[i].m * self.bodies[j].m / (r2 + eps2).sqrt();
                }
            }
        }
        pe
    }

    pub fn total_energy(&self, g: f64, eps2: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g, eps2)
    }

    /// Total linear momentum
    pub fn momentum(&self) -> NVec3 {
        self.bodies.iter().fold(NVec3::zeros(), |p, b| p + b.momentum())
    }

    /// Total angular momentum about the origin: sum of m (x cross v)
    pub fn angular_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |l, b| l + b.m * b.x.cross(&b.v))
    }

    /// Mass-weighted mean position, zero for an empty store
    pub fn center_of_mass(&self) -> NVec3 {
        let total: f64 = self.bodies.iter().map(|b| b.m).sum();
        if total <= 0.0 {
            return NVec3::zeros();
        }
        self.bodies.iter().fold(NVec3::zeros(), |c, b| c + b.m * b.x) / total
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|b| b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()))
    }
}
