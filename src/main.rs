use tribody::{IntegratorConfig, ScenarioConfig, Scenario, TraceRenderer};
use tribody::bench_integrators;
#[cfg(feature = "viewer")]
use tribody::run_3d;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Gravitational three-body simulation")]
struct Args {
    /// Scenario file, looked up in scenarios/ unless the path exists as given
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Override the scenario's integrator
    #[arg(long, value_enum)]
    integrator: Option<IntegratorConfig>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Override the step count
    #[arg(long)]
    steps: Option<usize>,

    /// Print positions instead of opening the viewer
    #[arg(long)]
    headless: bool,

    /// In headless mode, print every K-th step
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Time all integrators and exit
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = scenario_path(&args.file_name);
    info!("loading scenario {}", config_path.display());
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let mut scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    // Command-line overrides win over the file
    if let Some(integrator) = args.integrator {
        scenario_cfg.engine.integrator = integrator;
    }
    if let Some(dt) = args.dt {
        scenario_cfg.parameters.dt = dt;
    }
    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, every: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut renderer = TraceRenderer::new(BufWriter::new(stdout.lock()), every);
    scenario.run(&mut renderer);
    renderer.finish().context("failed to write trajectory")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_integrators();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    #[cfg(feature = "viewer")]
    {
        if !args.headless {
            run_3d(scenario);
            return Ok(());
        }
    }

    #[cfg(not(feature = "viewer"))]
    {
        if !args.headless {
            info!("built without the viewer feature, printing positions");
        }
    }

    run_headless(scenario, args.every)
}
