use log::{info, trace};

use crate::{
    config::DemoConfig,
    error::SimulationError,
    projectile::ProjectileController,
    renderer::{self, Canvas, EventSource, FrameLimiter, InputEvent},
    scene,
    world::World,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Owns the world and the projectile controller and drives them frame by frame.
pub struct Simulation {
    config: DemoConfig,
    world: World,
    controller: ProjectileController,
    frames: u64,
}

impl Simulation {
    /// Builds the world and the initial scene for `config`.
    pub fn new(config: DemoConfig) -> Result<Self, SimulationError> {
        let mut world = World::builder()
            .gravity(config.gravity)
            .delta_time(config.delta_time())
            .build();
        let size = config.size();
        scene::build_scene(&mut world, size.x, size.y)?;

        Ok(Self {
            controller: ProjectileController::new(config.launch_scale),
            config,
            world,
            frames: 0,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn controller(&self) -> &ProjectileController {
        &self.controller
    }

    /// Frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One iteration: handle input, render, advance the world by exactly one timestep.
    ///
    /// A `Quit` event stops event handling for this frame; the frame itself is still
    /// rendered and stepped.
    pub fn frame<E, C>(
        &mut self,
        input: &mut E,
        canvas: &mut C,
    ) -> Result<FrameOutcome, SimulationError>
    where
        E: EventSource + ?Sized,
        C: Canvas + ?Sized,
    {
        let aim_line = self.controller.aim_line(input.pointer_position());

        let mut outcome = FrameOutcome::Continue;
        for event in input.poll_events() {
            match event {
                InputEvent::Quit => {
                    outcome = FrameOutcome::Quit;
                    break;
                }
                InputEvent::Press(pointer) => self.controller.press(&mut self.world, pointer)?,
            }
        }

        renderer::draw_scene(canvas, &self.world, aim_line, &self.config)?;
        self.world.step();
        self.frames += 1;

        trace!("frame {} done", self.frames);
        Ok(outcome)
    }

    /// Runs frames until a `Quit` event arrives. Returns the number of frames processed
    /// by this call, the quitting frame included.
    pub fn run<E, C, L>(
        &mut self,
        input: &mut E,
        canvas: &mut C,
        limiter: &mut L,
    ) -> Result<u64, SimulationError>
    where
        E: EventSource + ?Sized,
        C: Canvas + ?Sized,
        L: FrameLimiter + ?Sized,
    {
        info!(
            "simulation running at {} fps (dt={:.4})",
            self.config.fps,
            self.world.delta_time()
        );
        let start = self.frames;

        loop {
            let outcome = self.frame(input, canvas)?;
            limiter.wait();
            if outcome == FrameOutcome::Quit {
                break;
            }
        }

        let frames = self.frames - start;
        info!("simulation stopped after {} frames", frames);
        Ok(frames)
    }
}
