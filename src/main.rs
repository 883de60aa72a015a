use ballsim::{euler_step, Scenario, ScenarioConfig, TickInput};
use ballsim::{bench_step, bench_step_curve};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_ball.yaml")]
    file_name: String,

    /// Number of ticks to run headless
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,

    /// Fixed time step per tick in seconds
    #[arg(short, long, default_value_t = 0.005)]
    dt: f64,

    /// Run the step-scaling benchmark instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Run the dense benchmark curve (CSV output)
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let cfg = ScenarioConfig::load(&config_path)?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }
    if args.bench_curve {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // Headless drive: fixed dt, no pointer interaction. A rendering
    // front end would feed real elapsed time and mouse state here.
    let input = TickInput::coasting(args.dt)?;

    log::info!(
        "running {} bodies for {} ticks at dt = {} s",
        scenario.system.len(),
        args.ticks,
        args.dt
    );

    for tick in 0..args.ticks {
        let ke = euler_step(
            &mut scenario.system,
            &scenario.forces,
            &scenario.parameters,
            &input,
        );
        if tick % 200 == 0 {
            log::info!("t = {:8.3} s, KE = {:12.4}", scenario.system.t, ke);
        }
    }

    log::info!(
        "done: t = {:.3} s, KE = {:.4}",
        scenario.system.t,
        scenario.system.ke_total
    );

    Ok(())
}
