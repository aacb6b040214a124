use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::states::{Body, System, NVec3};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::DEFAULT_G;

/// Deterministic three-body layout, no rand needed
fn bench_system() -> System {
    let bodies = (0..3)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 2.1 + 0.37).sin() * 5.0,
                (i_f * 2.1 + 0.13).cos() * 5.0,
                (i_f * 0.7).sin(),
            );
            let v = NVec3::new(-x.y, x.x, 0.0) * 0.01;
            Body::new(x, v, 1.0e10)
        })
        .collect();
    System::new(bodies)
}

/// Time every integrator over the same run and print cost and energy drift
pub fn bench_integrators() {
    let steps = 100_000;
    let dt = 0.05;
    let g = DEFAULT_G;

    let forces = AccelSet::new().with(NewtonianGravity::new(g));

    for method in IntegratorConfig::ALL {
        let mut sys = bench_system();
        let e0 = sys.total_energy(g, 0.0);

        // Warm up
        let mut warm = sys.clone();
        for _ in 0..100 {
            method.step(&mut warm, &forces, dt);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            method.step(&mut sys, &forces, dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let drift = ((sys.total_energy(g, 0.0) - e0) / e0).abs();
        println!(
            "{:>16}: {:8.3} s total, {:8.1} ns/step, {} force evals/step, energy drift {:.3e}",
            method.name(),
            elapsed,
            elapsed * 1e9 / steps as f64,
            method.force_evaluations(),
            drift,
        );
    }
}
