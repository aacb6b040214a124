//! Fixed-step time integrators
//!
//! Provides explicit Euler, symplectic Euler, classical RK4 and
//! velocity-Verlet, all driven by an `AccelSet`. Every integrator
//! mutates the body store in place and keeps no state between calls.
//! `IntegratorConfig::step` is the single dispatch point the driver uses.

use super::states::{System, NVec3};
use super::forces::AccelSet;
use crate::configuration::config::IntegratorConfig;

impl IntegratorConfig {
    /// Advance `sys` by one step of size `dt` with the selected method
    pub fn step(&self, sys: &mut System, forces: &AccelSet, dt: f64) {
        match self {
            IntegratorConfig::Euler => euler_step(sys, forces, dt),
            IntegratorConfig::SymplecticEuler => symplectic_euler_step(sys, forces, dt),
            IntegratorConfig::Rk4 => rk4_step(sys, forces, dt),
            IntegratorConfig::Verlet => verlet_step(sys, forces, dt),
        }
    }

    /// Force evaluations per step
    pub fn force_evaluations(&self) -> usize {
        match self {
            IntegratorConfig::Euler | IntegratorConfig::SymplecticEuler => 1,
            IntegratorConfig::Verlet => 2,
            IntegratorConfig::Rk4 => 4,
        }
    }
}

/// Advance the system by one step using Euler.
/// One force evaluation. The position update uses the velocity that was
/// just updated, so this is the semi-implicit form.
pub fn euler_step(sys: &mut System, forces: &AccelSet, dt: f64) {
    if sys.bodies.is_empty() {
        return;
    }

    // a_n from x_n
    let acc = forces.compute_acceleration(sys);

    // Kick then drift with the new velocity:
    // v_n+1 = v_n + dt a_n
    // x_n+1 = x_n + dt v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += *a * dt;
        b.x += b.v * dt;
    }
}

/// Symplectic Euler. Same update as [`euler_step`], kept as its own name
/// so either can be selected.
pub fn symplectic_euler_step(sys: &mut System, forces: &AccelSet, dt: f64) {
    euler_step(sys, forces, dt);
}

/// Advance the system by one step using classical 4th-order Runge-Kutta.
///
/// The state vector is (x, v) with derivative (v, a). Each stage sets a
/// trial state in a scratch copy of the system and evaluates forces there;
/// `sys` is only written once, by the weighted combination at the end.
/// Four force evaluations per step.
pub fn rk4_step(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }
    let half_dt = 0.5 * dt;

    // Snapshot x_0, v_0
    let x0: Vec<NVec3> = sys.bodies.iter().map(|b| b.x).collect();
    let v0: Vec<NVec3> = sys.bodies.iter().map(|b| b.v).collect();

    // Scratch system for trial states, masses carried over
    let mut trial = sys.clone();

    // k1 at (x_0, v_0)
    let k1_v = forces.compute_acceleration(&trial);
    let k1_x = v0.clone();

    // k2 at the midpoint reached with k1
    set_trial(&mut trial, &x0, &v0, &k1_x, &k1_v, half_dt);
    let k2_v = forces.compute_acceleration(&trial);
    let k2_x = trial_velocities(&trial);

    // k3 at the midpoint reached with k2
    set_trial(&mut trial, &x0, &v0, &k2_x, &k2_v, half_dt);
    let k3_v = forces.compute_acceleration(&trial);
    let k3_x = trial_velocities(&trial);

    // k4 at the full step reached with k3
    set_trial(&mut trial, &x0, &v0, &k3_x, &k3_v, dt);
    let k4_v = forces.compute_acceleration(&trial);
    let k4_x = trial_velocities(&trial);

    // y_n+1 = y_0 + dt/6 (k1 + 2 k2 + 2 k3 + k4), starting from the snapshot
    let sixth_dt = dt / 6.0;
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.x = x0[i] + sixth_dt * (k1_x[i] + 2.0 * k2_x[i] + 2.0 * k3_x[i] + k4_x[i]);
        b.v = v0[i] + sixth_dt * (k1_v[i] + 2.0 * k2_v[i] + 2.0 * k3_v[i] + k4_v[i]);
    }
}

/// trial = (x_0 + h k_x, v_0 + h k_v)
fn set_trial(trial: &mut System, x0: &[NVec3], v0: &[NVec3], k_x: &[NVec3], k_v: &[NVec3], h: f64) {
    for (i, b) in trial.bodies.iter_mut().enumerate() {
        b.x = x0[i] + h * k_x[i];
        b.v = v0[i] + h * k_v[i];
    }
}

fn trial_velocities(trial: &System) -> Vec<NVec3> {
    trial.bodies.iter().map(|b| b.v).collect()
}

/// Advance the system by one step using velocity-Verlet.
/// Two force evaluations per step, the second at the updated positions.
pub fn verlet_step(sys: &mut System, forces: &AccelSet, dt: f64) {
    if sys.bodies.is_empty() {
        return;
    }
    let half_dt = 0.5 * dt;

    // a_n from x_n
    let a_old = forces.compute_acceleration(sys);

    // Drift: x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.x += b.v * dt + half_dt * dt * *a;
    }

    // a_n+1 from x_n+1
    let a_new = forces.compute_acceleration(sys);

    // Kick with the average: v_n+1 = v_n + (dt/2) (a_n + a_n+1)
    for ((b, a0), a1) in sys.bodies.iter_mut().zip(a_old.iter()).zip(a_new.iter()) {
        b.v += half_dt * (*a0 + *a1);
    }
}
