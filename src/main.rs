use log::info;
use slingshot::{
    config::DemoConfig,
    renderer::{self, FrameClock},
    simulation::Simulation,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    let (mut input, mut canvas) = renderer::create_window(&config)?;
    let mut clock = FrameClock::new(config.fps);

    let mut simulation = Simulation::new(config)?;
    let frames = simulation.run(&mut input, &mut canvas, &mut clock)?;

    info!("bye after {frames} frames");
    Ok(())
}
